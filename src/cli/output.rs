//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GeoQueryArgs, OutputFormat};
use crate::error::Result;
use crate::search::description::SearchDescription;
use crate::token::debug::DebugInfo;

/// Result structure for the extend command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtensionResult {
    pub token: DebugInfo,
    pub input: SearchDescription,
    pub derived: Vec<SearchDescription>,
}

/// Result structure for the debug command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenDebugResult {
    pub code: char,
    pub info: DebugInfo,
}

/// Output the result of the extend command.
pub fn output_extension(result: &ExtensionResult, args: &GeoQueryArgs) -> Result<()> {
    let rendered = match args.output_format {
        OutputFormat::Json => render_json(result, args.pretty)?,
        OutputFormat::Human => render_extension_human(result, args.verbosity()),
    };
    println!("{rendered}");
    Ok(())
}

/// Output the result of the debug command.
pub fn output_token_debug(result: &TokenDebugResult, args: &GeoQueryArgs) -> Result<()> {
    let rendered = match args.output_format {
        OutputFormat::Json => render_json(result, args.pretty)?,
        OutputFormat::Human => format!("[{}] {}", result.code, result.info),
    };
    println!("{rendered}");
    Ok(())
}

/// Render an extension result in human-readable format.
fn render_extension_human(result: &ExtensionResult, verbosity: u8) -> String {
    let mut lines = Vec::new();
    if verbosity > 0 {
        lines.push(format!("Token: {}", result.token));
        lines.push(format!("Input: {}", result.input));
        lines.push(String::new());
    }
    if result.derived.is_empty() {
        lines.push("no derived searches".to_string());
    }
    for (i, search) in result.derived.iter().enumerate() {
        lines.push(format!("{}. {search}", i + 1));
    }
    lines.join("\n")
}

/// Render in JSON format.
fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::phrase::PhraseType;
    use crate::query::position::TokenPosition;
    use crate::search::context::SearchContext;
    use crate::token::Token;
    use crate::token::word::WordToken;

    fn sample_result() -> ExtensionResult {
        let token = WordToken::new(5, 2, 1);
        let input = SearchDescription::new();
        let derived = token.extend_search(
            &input,
            &TokenPosition::new(0, PhraseType::Default),
            &SearchContext::new(10),
        );
        ExtensionResult {
            token: token.debug_info(),
            input,
            derived,
        }
    }

    #[test]
    fn test_render_json_pretty() {
        let rendered = render_json(&sample_result(), true).unwrap();
        assert!(rendered.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["token"]["Type"], "word");
        assert_eq!(value["token"]["Info"]["count"], 2);
        assert_eq!(value["derived"][0]["name_tokens"], serde_json::json!([5]));
        assert_eq!(value["derived"][0]["rare_name"], true);
        assert_eq!(value["derived"][0]["search_rank"], 1);
    }

    #[test]
    fn test_render_json_compact() {
        let rendered = render_json(&sample_result(), false).unwrap();
        assert!(!rendered.contains('\n'));

        let decoded: ExtensionResult = serde_json::from_str(&rendered).unwrap();
        assert_eq!(decoded.derived.len(), 1);
        assert_eq!(decoded.derived[0].name_tokens(), &[5]);
    }

    #[test]
    fn test_render_human() {
        let result = sample_result();
        assert_eq!(
            render_extension_human(&result, 0),
            "1. rank=1 name=[5] address=[] rare"
        );

        let verbose = render_extension_human(&result, 1);
        assert!(verbose.starts_with("Token: word 5 count=2 terms=1\n"));
        assert!(verbose.contains("Input: rank=0 name=[] address=[]"));

        let empty = ExtensionResult {
            derived: Vec::new(),
            ..result
        };
        assert_eq!(render_extension_human(&empty, 0), "no derived searches");
    }
}
