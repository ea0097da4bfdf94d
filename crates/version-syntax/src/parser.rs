use crate::error::VersionSyntaxError;
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar/server_version.pest"]
pub struct VersionParser;

/// Version components captured by a single grammar match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Components {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
}

/// Runs `rule` against `input` and collects the numeric components it matched.
pub(crate) fn match_components(rule: Rule, input: &str) -> Result<Components, VersionSyntaxError> {
    if input.is_empty() {
        return Err(VersionSyntaxError::Empty);
    }

    let mut pairs = VersionParser::parse(rule, input).map_err(VersionSyntaxError::from_pest_error)?;
    let mut components = Components::default();

    if let Some(root) = pairs.next() {
        for pair in root.into_inner() {
            match pair.as_rule() {
                Rule::major => components.major = Some(component(&pair)?),
                Rule::minor => components.minor = Some(component(&pair)?),
                Rule::patch => components.patch = Some(component(&pair)?),
                _ => {}
            }
        }
    }

    Ok(components)
}

fn component(pair: &Pair<Rule>) -> Result<u32, VersionSyntaxError> {
    let digits = pair.as_str();
    digits
        .parse::<u32>()
        .map_err(|_| VersionSyntaxError::ComponentOverflow(digits.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_mysql_components() {
        let components = match_components(Rule::mysql_version, "8.0.36-log").unwrap();
        assert_eq!(
            components,
            Components {
                major: Some(8),
                minor: Some(0),
                patch: Some(36),
            }
        );
    }

    #[test]
    fn test_dangling_dot_is_not_a_component() {
        let components = match_components(Rule::mysql_version, "5.7.").unwrap();
        assert_eq!(components.minor, Some(7));
        assert_eq!(components.patch, None);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            match_components(Rule::mysql_version, ""),
            Err(VersionSyntaxError::Empty)
        ));
    }

    #[test]
    fn test_overflowing_component() {
        let result = match_components(Rule::mysql_version, "99999999999.1");
        assert!(matches!(
            result,
            Err(VersionSyntaxError::ComponentOverflow(digits)) if digits == "99999999999"
        ));
    }
}
