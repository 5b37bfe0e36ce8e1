//! Command-line arguments for the demo.

use std::path::PathBuf;

use clap::Parser;
use custom_select::NativeOption;

/// One `value=label` entry, with a trailing `*` marking it selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionArg {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl OptionArg {
    pub fn into_native(self) -> NativeOption {
        NativeOption::new(self.value, self.label).selected(self.selected)
    }
}

pub fn parse_option(s: &str) -> Result<OptionArg, String> {
    let (entry, selected) = match s.strip_suffix('*') {
        Some(rest) => (rest, true),
        None => (s, false),
    };
    let (value, label) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected VALUE=LABEL, got '{s}'"))?;
    if value.is_empty() {
        return Err(format!("empty value in '{s}'"));
    }
    Ok(OptionArg {
        value: value.to_string(),
        label: label.to_string(),
        selected,
    })
}

#[derive(Debug, Parser)]
#[command(name = "select-demo", about = "Drive a custom select widget from the keyboard")]
pub struct Args {
    /// Option as VALUE=LABEL; append '*' to preselect it. Repeatable.
    #[arg(short, long = "option", value_parser = parse_option)]
    pub options: Vec<OptionArg>,

    /// Form field name of the native select.
    #[arg(long, default_value = "country")]
    pub name: String,

    /// Rows visible in the open list before it scrolls.
    #[arg(long, default_value_t = 5)]
    pub rows: u16,

    /// Type-ahead reset delay in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub search_delay_ms: u64,

    /// Debug log destination.
    #[arg(long, default_value = "select-demo.log")]
    pub log_file: PathBuf,
}

impl Args {
    /// Options from the command line, or a built-in list when none were given.
    pub fn native_options(&self) -> Vec<NativeOption> {
        if !self.options.is_empty() {
            return self.options.iter().cloned().map(OptionArg::into_native).collect();
        }
        [
            ("at", "Austria"),
            ("be", "Belgium"),
            ("bg", "Bulgaria"),
            ("de", "Germany"),
            ("dk", "Denmark"),
            ("es", "Spain"),
            ("fi", "Finland"),
            ("fr", "France"),
            ("nl", "Netherlands"),
            ("se", "Sweden"),
        ]
        .into_iter()
        .map(|(value, label)| NativeOption::new(value, label))
        .collect()
    }
}
