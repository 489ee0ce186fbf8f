//! Command implementations for the geoquery CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::query::position::TokenPosition;
use crate::search::context::SearchContext;
use crate::search::description::SearchDescription;
use crate::token::Token;
use crate::token::word::WordToken;

/// Execute a CLI command.
pub fn execute_command(args: GeoQueryArgs) -> Result<()> {
    match &args.command {
        Command::Extend(extend_args) => extend_search(extend_args.clone(), &args),
        Command::Debug(word_args) => debug_token(word_args.clone(), &args),
    }
}

/// Load the configuration and build the evaluation context.
pub fn load_context(args: &GeoQueryArgs) -> Result<SearchContext> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    }
    .with_env_overrides()?;

    if let Some(threshold) = args.threshold {
        config = config.with_name_only_threshold(threshold);
    }

    let ctx = config.into_context();
    info!("rare name threshold: {:?}", ctx.rare_name_threshold());
    Ok(ctx)
}

/// Build the starting search from the command line tokens.
pub fn initial_search(args: &ExtendArgs) -> SearchDescription {
    let mut search = SearchDescription::new();
    for &id in &args.name_tokens {
        search.add_name_token(id, 0);
    }
    for &id in &args.partial_name_tokens {
        search.add_partial_name_token(id);
    }
    for &id in &args.address_tokens {
        search.add_address_token(id, true);
    }
    search
}

fn word_token(args: &WordArgs) -> WordToken {
    WordToken::new(args.id, args.count, args.terms)
}

/// Offer a word to a search and print the derived searches.
fn extend_search(args: ExtendArgs, cli_args: &GeoQueryArgs) -> Result<()> {
    let ctx = load_context(cli_args)?;
    let token = word_token(&args.word);
    let search = initial_search(&args);

    let mut position = TokenPosition::new(args.phrase_index, args.phrase_type);
    if let Some(count) = args.phrase_count {
        position = position.with_phrase_count(count);
    }

    let derived = token.extend_search(&search, &position, &ctx);

    output_extension(
        &ExtensionResult {
            token: token.debug_info(),
            input: search,
            derived,
        },
        cli_args,
    )
}

/// Print the debug description of a word.
fn debug_token(args: WordArgs, cli_args: &GeoQueryArgs) -> Result<()> {
    let token = word_token(&args);
    output_token_debug(
        &TokenDebugResult {
            code: token.debug_code(),
            info: token.debug_info(),
        },
        cli_args,
    )
}
