use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(name = "gix-bundle", about = "Inspect the header of git bundle files", version)]
pub struct Args {
    /// Display debug messages while reading the bundle.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Subcommands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommands {
    /// List the references advertised by a bundle, one `<id> <name>` per line.
    ListHeads {
        /// The bundle file to read.
        path: PathBuf,
    },
    /// Print every section of a bundle header and the offset of its pack.
    Header {
        /// The bundle file to read.
        path: PathBuf,
    },
    /// Check that a bundle header parses and that all of its object ids are well-formed.
    ///
    /// It does not check whether the prerequisites exist in any repository.
    Verify {
        /// The bundle file to read.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn subcommands_take_a_path() {
        let args = Args::try_parse_from(["gix-bundle", "-v", "list-heads", "repo.bundle"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.cmd, Subcommands::ListHeads { path } if path == PathBuf::from("repo.bundle")));

        assert!(Args::try_parse_from(["gix-bundle", "verify"]).is_err());
    }
}
