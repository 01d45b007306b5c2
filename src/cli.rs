// Command line interface module
// Handles parsing of command line arguments and locating the config file

use anyhow::{bail, Result};
use clap::Parser;
use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

/// chaksu - A minimal desktop image viewer
#[derive(Parser, Debug)]
#[command(name = "chaksu")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Image files or directories containing images (default: working directory)
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,

    /// Config file to use; `-` reads it from stdin
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the resolved settings in config file syntax and exit
    #[arg(long, default_value = "false")]
    pub print_config: bool,

    /// Validate the config file, report problems and exit
    #[arg(long, default_value = "false")]
    pub check: bool,
}

/// Where the config comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// The default location; a missing file there is not an error
    Default(PathBuf),
    /// A file named on the command line
    File(PathBuf),
    /// Bytes piped to stdin
    Stdin(Vec<u8>),
    /// No default location could be determined
    None,
}

/// Parsed arguments with the config source resolved
#[derive(Debug)]
pub struct ParsedArgs {
    pub images: Vec<PathBuf>,
    pub config: ConfigSource,
    pub print_config: bool,
    pub check: bool,
}

/// Default config location: `$CHAKSU_CONFIG`, then
/// `$XDG_CONFIG_HOME/chaksu/config`, then `$HOME/.config/chaksu/config`
pub fn default_config_path() -> Option<PathBuf> {
    let non_empty = |name: &str| env::var_os(name).filter(|v| !v.is_empty());

    if let Some(path) = non_empty("CHAKSU_CONFIG") {
        return Some(PathBuf::from(path));
    }
    if let Some(dir) = non_empty("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("chaksu").join("config"));
    }
    non_empty("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("chaksu")
            .join("config")
    })
}

/// Check if stdin has data available (is a pipe)
fn stdin_has_data() -> bool {
    !atty::is(atty::Stream::Stdin)
}

/// Read the config from stdin
fn read_stdin() -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Parse command line arguments and resolve the config source
pub fn parse_args() -> Result<ParsedArgs> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) if path.as_os_str() == "-" => {
            if !stdin_has_data() {
                bail!("--config - expects the config to be piped to stdin");
            }
            ConfigSource::Stdin(read_stdin()?)
        }
        Some(path) => ConfigSource::File(path),
        None => match default_config_path() {
            Some(path) => ConfigSource::Default(path),
            None => ConfigSource::None,
        },
    };

    Ok(ParsedArgs {
        images: args.images,
        config,
        print_config: args.print_config,
        check: args.check,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags_and_images() {
        let args =
            Args::try_parse_from(["chaksu", "-c", "my.conf", "--check", "a.png", "pics"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("my.conf")));
        assert!(args.check);
        assert!(!args.print_config);
        assert_eq!(args.images, vec![PathBuf::from("a.png"), PathBuf::from("pics")]);
    }
}
