//! Parameters for the single `resize` command
//!
//! Arguments may be given on the command line or completed by a
//! [`ParamSource`]. [`resolve`] decides which of the two applies without
//! doing any I/O.

use crate::error::{Error, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

/// Possibly incomplete arguments as received from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeArgs {
    pub src: Option<String>,
    pub out: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    pub src: PathBuf,
    pub out: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Complete(ResizeParams),
    /// Names of the fields that were not supplied.
    NeedsInput(Vec<&'static str>),
}

/// Check whether `args` is complete and, if so, validate it.
pub fn resolve(args: &ResizeArgs) -> Result<Resolved> {
    let fields = [
        ("srcImg", &args.src),
        ("outPath", &args.out),
        ("width", &args.width),
        ("height", &args.height),
    ];
    let missing: Vec<_> = fields
        .iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Ok(Resolved::NeedsInput(missing));
    }

    // All four are present past this point.
    let field = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();
    Ok(Resolved::Complete(ResizeParams {
        src: PathBuf::from(field(&args.src)),
        out: PathBuf::from(field(&args.out)),
        width: parse_dimension("width", &field(&args.width))?,
        height: parse_dimension("height", &field(&args.height))?,
    }))
}

fn parse_dimension(name: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidParams(format!(
            "{name} must be a positive integer, got {value:?}"
        ))),
    }
}

/// Supplies the parameters the command line left out.
pub trait ParamSource {
    fn complete(&mut self, args: &ResizeArgs, missing: &[&'static str]) -> Result<ResizeParams>;
}

/// Resolve `args`, asking `source` only when something is missing.
pub fn resolve_with(args: &ResizeArgs, source: &mut dyn ParamSource) -> Result<ResizeParams> {
    match resolve(args)? {
        Resolved::Complete(params) => Ok(params),
        Resolved::NeedsInput(missing) => source.complete(args, &missing),
    }
}

/// Fails immediately, naming the missing fields. Used for scripted runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailFast;

impl ParamSource for FailFast {
    fn complete(&mut self, _args: &ResizeArgs, missing: &[&'static str]) -> Result<ResizeParams> {
        Err(Error::InvalidParams(format!(
            "missing {}",
            missing.join(", ")
        )))
    }
}

/// Questions asked when any argument is missing, in answer order.
pub const QUESTIONS: [&str; 4] = [
    "Source image path",
    "Output image path",
    "New image width",
    "New image height",
];

/// Turn the four answers to [`QUESTIONS`] into parameters. Blank answers are
/// rejected.
pub fn params_from_answers(answers: [Option<String>; 4]) -> Result<ResizeParams> {
    let [src, out, width, height] = answers.map(|answer| {
        answer
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
    });
    match resolve(&ResizeArgs {
        src,
        out,
        width,
        height,
    })? {
        Resolved::Complete(params) => Ok(params),
        Resolved::NeedsInput(missing) => Err(Error::InvalidParams(format!(
            "no answer for {}",
            missing.join(", ")
        ))),
    }
}

/// Asks for all four values on the terminal.
pub struct Prompter {
    theme: ColorfulTheme,
}

impl Default for Prompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter {
    fn ask(&self, question: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(Error::Prompt)
    }
}

impl ParamSource for Prompter {
    fn complete(&mut self, _args: &ResizeArgs, _missing: &[&'static str]) -> Result<ResizeParams> {
        let mut answers: [Option<String>; 4] = Default::default();
        for (answer, question) in answers.iter_mut().zip(QUESTIONS) {
            *answer = Some(self.ask(question)?);
        }
        params_from_answers(answers)
    }
}
