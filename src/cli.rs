//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`LocaleArg`] - Placeholder language option

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{ExportConfig, Locale};

/// Convert a WeChat conversation dump into the ChatLab exchange format.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlab")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlab messages.json --talker wxid_abc123 --name Alice
    chatlab room.json -t 12345@chatroom -o room.chatlab.json --pretty
    chatlab room.json -t 12345@chatroom --locale zh --sort-members")]
pub struct Args {
    /// Path to the source messages JSON dump
    pub input: String,

    /// Conversation identifier (ends in @chatroom for groups)
    #[arg(short, long, value_name = "ID")]
    pub talker: String,

    /// Conversation display name (defaults to the identifier)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Path to output file
    #[arg(short, long, default_value = "chatlab.json")]
    pub output: String,

    /// Language of placeholder contents
    #[arg(short, long, value_enum, default_value = "en")]
    pub locale: LocaleArg,

    /// Free-text description written to the header
    #[arg(long)]
    pub description: Option<String>,

    /// Group avatar reference (group conversations only)
    #[arg(long, value_name = "URL")]
    pub group_avatar: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Sort members by platform id for reproducible output
    #[arg(long)]
    pub sort_members: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the export configuration from the parsed arguments.
    pub fn export_config(&self) -> ExportConfig {
        let mut config = ExportConfig::new().with_locale(self.locale.into());
        if let Some(ref description) = self.description {
            config = config.with_description(description.clone());
        }
        if let Some(ref avatar) = self.group_avatar {
            config = config.with_group_avatar(avatar.clone());
        }
        config
    }
}

/// Placeholder language options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum LocaleArg {
    /// English placeholders ("[image]", "Me")
    #[default]
    #[value(alias = "english")]
    En,

    /// Chinese placeholders ("[图片]", "我")
    #[value(alias = "chinese")]
    Zh,
}

// Conversion to library locale type
impl From<LocaleArg> for Locale {
    fn from(locale: LocaleArg) -> Locale {
        match locale {
            LocaleArg::En => Locale::English,
            LocaleArg::Zh => Locale::Chinese,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["chatlab", "in.json", "--talker", "wxid_a"]).unwrap();
        assert_eq!(args.input, "in.json");
        assert_eq!(args.talker, "wxid_a");
        assert_eq!(args.name, "");
        assert_eq!(args.output, "chatlab.json");
        assert_eq!(args.locale, LocaleArg::En);
        assert!(!args.pretty);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_requires_talker() {
        assert!(Args::try_parse_from(["chatlab", "in.json"]).is_err());
    }

    #[test]
    fn test_export_config_from_args() {
        let args = Args::try_parse_from([
            "chatlab",
            "in.json",
            "-t",
            "1@chatroom",
            "--locale",
            "chinese",
            "--description",
            "archive",
            "--group-avatar",
            "https://img.test/a.png",
            "-vv",
        ])
        .unwrap();

        let config = args.export_config();
        assert_eq!(config.locale, Locale::Chinese);
        assert_eq!(config.description.as_deref(), Some("archive"));
        assert_eq!(config.group_avatar.as_deref(), Some("https://img.test/a.png"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_locale_arg_conversion() {
        assert_eq!(Locale::from(LocaleArg::En), Locale::English);
        assert_eq!(Locale::from(LocaleArg::Zh), Locale::Chinese);
    }
}
