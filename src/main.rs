#![deny(rust_2018_idioms)]
#![forbid(unsafe_code)]

mod plumbing;

fn main() -> anyhow::Result<()> {
    plumbing::main()
}
