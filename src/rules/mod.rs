//! Rule tables and the matcher that evaluates them.
//!
//! Every rule-set is a flat, ordered list of `(pattern, tier, reason)` records.
//! The tables live in their own modules as plain data; this module compiles
//! them and evaluates text against them with first-match-wins semantics.

pub mod boundary;
pub mod commands;
pub mod files;
pub mod prompt;

use regex::{Regex, RegexBuilder};

use crate::config::ConfigError;

/// Severity tier of a rule. Lower tiers never override higher ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Block the operation.
    Block,
    /// Let the operation through but record a warning.
    Warn,
    /// Explicitly known to be safe; stop evaluating.
    Safe,
}

/// Static description of a rule, as written in the tables.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub id: &'static str,
    pub pattern: &'static str,
    /// Exception pattern anchored at the end of the match.
    pub unless: Option<&'static str>,
    pub reason: &'static str,
}

impl RuleSpec {
    pub const fn new(id: &'static str, pattern: &'static str, reason: &'static str) -> Self {
        Self {
            id,
            pattern,
            unless: None,
            reason,
        }
    }

    pub const fn unless(mut self, pattern: &'static str) -> Self {
        self.unless = Some(pattern);
        self
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub tier: Tier,
    pub reason: String,
    regex: Regex,
    unless: Option<Exception>,
}

/// A negative look-ahead, split in two because `regex` has no look-around.
#[derive(Debug, Clone)]
struct Exception {
    /// The rule pattern anchored at the end of the haystack.
    ending: Regex,
    /// The exception, anchored at the start of the remaining text.
    tail: Regex,
}

impl Rule {
    /// Compile a rule. Matching is always case-insensitive.
    pub fn new(
        id: impl Into<String>,
        pattern: &str,
        tier: Tier,
        reason: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            id: id.into(),
            tier,
            reason: reason.into(),
            regex: compile(pattern)?,
            unless: None,
        })
    }

    /// Attach an exception: a match is discarded when the text following it
    /// matches `pattern` (anchored at the end of the match).
    pub fn with_unless(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.unless = Some(Exception {
            ending: compile(&format!("(?:{})$", self.regex.as_str()))?,
            tail: compile(&format!("^(?:{pattern})"))?,
        });
        Ok(self)
    }

    fn from_spec(spec: &RuleSpec, tier: Tier) -> Result<Self, ConfigError> {
        let rule = Self::new(spec.id, spec.pattern, tier, spec.reason)?;
        match spec.unless {
            Some(unless) => rule.with_unless(unless),
            None => Ok(rule),
        }
    }

    /// Check whether the rule fires on `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match &self.unless {
            None => self.regex.is_match(text),
            Some(_) if !self.regex.is_match(text) => false,
            // Any end offset the pattern can reach counts, not only the
            // leftmost-first match, so a later unexcepted match still fires.
            Some(unless) => text
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(text.len()))
                .any(|end| {
                    unless.ending.is_match(&text[..end]) && !unless.tail.is_match(&text[end..])
                }),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::Regex {
            pattern: pattern.to_string(),
            source: e,
        })
}

/// An ordered, named collection of rules sharing one tier.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: &'static str,
    pub tier: Tier,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile a table into a rule-set.
    pub fn compile(name: &'static str, tier: Tier, specs: &[RuleSpec]) -> Result<Self, ConfigError> {
        let rules = specs
            .iter()
            .map(|spec| Rule::from_spec(spec, tier))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, tier, rules })
    }

    /// Append an already-compiled rule. Its tier is forced to the set's tier.
    pub fn push(&mut self, mut rule: Rule) {
        rule.tier = self.tier;
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Return the first rule matching `text`, in table order.
    pub fn first_match(&self, text: &str) -> Option<&Rule> {
        if text.is_empty() {
            return None;
        }
        self.rules.iter().find(|rule| rule.is_match(text))
    }

    /// Every rule matching `text`, in table order.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |rule| !text.is_empty() && rule.is_match(text))
    }

    /// Like [`RuleSet::first_match`], trying each candidate form of the input.
    pub fn first_match_any<S: AsRef<str>>(&self, candidates: &[S]) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|rule| candidates.iter().any(|c| !c.as_ref().is_empty() && rule.is_match(c.as_ref())))
    }
}

/// Result of evaluating text against several rule-sets.
#[derive(Debug, Clone, Copy)]
pub enum Evaluation<'a> {
    Blocked(&'a Rule),
    Warned(&'a Rule),
    SafeListed(&'a Rule),
    NoMatch,
}

impl Evaluation<'_> {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Evaluation::Blocked(_))
    }
}

/// Evaluate candidate forms of one input against `sets`.
///
/// Sets are visited by tier (block, then warn, then safe) and, within a tier,
/// in the order given. The first matching rule ends evaluation.
pub fn evaluate<'a, S: AsRef<str>>(candidates: &[S], sets: &[&'a RuleSet]) -> Evaluation<'a> {
    for tier in [Tier::Block, Tier::Warn, Tier::Safe] {
        for set in sets.iter().filter(|s| s.tier == tier) {
            if let Some(rule) = set.first_match_any(candidates) {
                return match tier {
                    Tier::Block => Evaluation::Blocked(rule),
                    Tier::Warn => Evaluation::Warned(rule),
                    Tier::Safe => Evaluation::SafeListed(rule),
                };
            }
        }
    }
    Evaluation::NoMatch
}

/// Every compiled rule-set the hooks use.
#[derive(Debug, Clone)]
pub struct RuleBook {
    pub critical_command: RuleSet,
    pub warning_command: RuleSet,
    pub safe_command: RuleSet,
    pub critical_file: RuleSet,
    pub config_file: RuleSet,
    pub forbidden_read: RuleSet,
    pub suspicious_prompt: RuleSet,
    pub boundary_command: RuleSet,
    pub safe_local_command: RuleSet,
    pub system_path: RuleSet,
}

impl RuleBook {
    /// Compile the built-in tables.
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self {
            critical_command: RuleSet::compile("critical-command", Tier::Block, commands::CRITICAL)?,
            warning_command: RuleSet::compile("warning-command", Tier::Warn, commands::WARNING)?,
            safe_command: RuleSet::compile("safe-command", Tier::Safe, commands::SAFE)?,
            critical_file: RuleSet::compile("critical-file", Tier::Block, files::CRITICAL)?,
            config_file: RuleSet::compile("config-file", Tier::Warn, files::CONFIG)?,
            forbidden_read: RuleSet::compile("forbidden-read", Tier::Block, files::FORBIDDEN_READ)?,
            suspicious_prompt: RuleSet::compile(
                "suspicious-prompt",
                Tier::Warn,
                prompt::SUSPICIOUS,
            )?,
            boundary_command: RuleSet::compile(
                "boundary-command",
                Tier::Block,
                boundary::ESCAPING_COMMANDS,
            )?,
            safe_local_command: RuleSet::compile(
                "safe-local-command",
                Tier::Safe,
                boundary::SAFE_LOCAL,
            )?,
            system_path: RuleSet::compile("system-path", Tier::Block, boundary::SYSTEM_PATHS)?,
        })
    }
}
