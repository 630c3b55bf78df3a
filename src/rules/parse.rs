//! Parser for rule declarations such as `Required;Range(1, 10);Match(/^a+$/)`.

use super::Rule;
use regex::Regex;

/// A rule declaration that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSyntaxError {
    pub rule: String,
    pub reason: String,
}

impl RuleSyntaxError {
    fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

/// Parses a `;`-separated list of rules.
///
/// An empty declaration yields no rules.
pub fn parse_rules(declaration: &str) -> Result<Vec<Rule>, RuleSyntaxError> {
    let mut rules = Vec::new();
    let mut rest = declaration.trim_start();

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix(';') {
            rest = stripped.trim_start();
            continue;
        }

        let name_len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        if name_len == 0 {
            return Err(RuleSyntaxError::new(rest, "expected a rule name"));
        }
        let name = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        let args = if let Some(after_paren) = rest.strip_prefix('(') {
            let (args, remaining) = split_args(name, after_paren)?;
            rest = remaining;
            Some(args)
        } else {
            None
        };

        rules.push(build_rule(name, args)?);

        rest = rest.trim_start();
        match rest.chars().next() {
            None | Some(';') => {}
            Some(_) => {
                return Err(RuleSyntaxError::new(
                    name,
                    format!("unexpected `{rest}` after rule"),
                ))
            }
        }
    }

    Ok(rules)
}

/// Splits `args)rest` into the raw argument text and what follows `)`.
///
/// Regex arguments are delimited by `/.../` and may themselves contain
/// parentheses, so they end at the first `/)`.
fn split_args<'a>(name: &str, input: &'a str) -> Result<(&'a str, &'a str), RuleSyntaxError> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('/') {
        let end = trimmed[1..]
            .find("/)")
            .ok_or_else(|| RuleSyntaxError::new(name, "unterminated `/pattern/` argument"))?;
        let args = &trimmed[..end + 2];
        Ok((args, &trimmed[end + 3..]))
    } else {
        let end = input
            .find(')')
            .ok_or_else(|| RuleSyntaxError::new(name, "missing `)`"))?;
        Ok((&input[..end], &input[end + 1..]))
    }
}

fn build_rule(name: &str, args: Option<&str>) -> Result<Rule, RuleSyntaxError> {
    let rule = match name {
        "Required" => no_args(name, args, Rule::Required)?,
        "Alpha" => no_args(name, args, Rule::Alpha)?,
        "Numeric" => no_args(name, args, Rule::Numeric)?,
        "AlphaNumeric" => no_args(name, args, Rule::AlphaNumeric)?,
        "AlphaDash" => no_args(name, args, Rule::AlphaDash)?,
        "Email" => no_args(name, args, Rule::Email)?,
        "IP" => no_args(name, args, Rule::Ip)?,
        "Min" => {
            let [min] = numbers::<1>(name, args)?;
            Rule::Min(min)
        }
        "Max" => {
            let [max] = numbers::<1>(name, args)?;
            Rule::Max(max)
        }
        "Range" => {
            let [min, max] = numbers::<2>(name, args)?;
            if min > max {
                return Err(RuleSyntaxError::new(
                    name,
                    format!("lower bound {min} is greater than upper bound {max}"),
                ));
            }
            Rule::Range(min, max)
        }
        "MinSize" => {
            let [size] = sizes::<1>(name, args)?;
            Rule::MinSize(size)
        }
        "MaxSize" => {
            let [size] = sizes::<1>(name, args)?;
            Rule::MaxSize(size)
        }
        "Length" => {
            let [size] = sizes::<1>(name, args)?;
            Rule::Length(size)
        }
        "Match" => Rule::Match(pattern(name, args)?),
        "NoMatch" => Rule::NoMatch(pattern(name, args)?),
        _ => return Err(RuleSyntaxError::new(name, "unknown rule")),
    };
    Ok(rule)
}

fn no_args(name: &str, args: Option<&str>, rule: Rule) -> Result<Rule, RuleSyntaxError> {
    match args {
        Some(a) if !a.trim().is_empty() => Err(RuleSyntaxError::new(name, "takes no arguments")),
        _ => Ok(rule),
    }
}

fn split_list<'a, const N: usize>(
    name: &str,
    args: Option<&'a str>,
) -> Result<[&'a str; N], RuleSyntaxError> {
    let raw = args.ok_or_else(|| RuleSyntaxError::new(name, format!("expects {N} argument(s)")))?;
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    parts.try_into().map_err(|parts: Vec<&str>| {
        RuleSyntaxError::new(
            name,
            format!("expects {N} argument(s), got {}", parts.len()),
        )
    })
}

fn numbers<const N: usize>(name: &str, args: Option<&str>) -> Result<[f64; N], RuleSyntaxError> {
    let parts = split_list::<N>(name, args)?;
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RuleSyntaxError::new(name, format!("`{part}` is not a number")))?;
    }
    Ok(out)
}

fn sizes<const N: usize>(name: &str, args: Option<&str>) -> Result<[usize; N], RuleSyntaxError> {
    let parts = split_list::<N>(name, args)?;
    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.parse::<usize>().map_err(|_| {
            RuleSyntaxError::new(name, format!("`{part}` is not a valid size"))
        })?;
    }
    Ok(out)
}

fn pattern(name: &str, args: Option<&str>) -> Result<Regex, RuleSyntaxError> {
    let raw = args
        .map(str::trim)
        .and_then(|a| a.strip_prefix('/'))
        .and_then(|a| a.strip_suffix('/'))
        .ok_or_else(|| RuleSyntaxError::new(name, "expects a `/pattern/` argument"))?;
    Regex::new(raw).map_err(|e| RuleSyntaxError::new(name, e.to_string()))
}
