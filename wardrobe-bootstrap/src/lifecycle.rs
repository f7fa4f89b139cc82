use anyhow::{anyhow, bail, Context, Result};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tokio::fs;
use tracing::{debug, info};

use wardrobe_application::commands::{
    add_item, apply_outfit, build_lock, capture_from_live_target, create_outfit, delete_outfit,
    import_outfits, on_login, remove_item, rename_outfit, reset_store, save_outfit,
    update_setting, ApplyOptions, LoginOutcome, OutfitSource,
};
use wardrobe_application::queries::{
    current_settings, describe_asset, diff_stored_outfits, export_outfits, get_outfit,
    list_groups, list_locks, list_outfits, search_catalog, CatalogQuery,
};
use wardrobe_application::AppState;
use wardrobe_domain::{ColorSpec, ItemConfig, PropertyBag};
use wardrobe_infrastructure::{AppConfig, CONFIG_ENV};

use crate::cli::{AddItemArgs, Cli, Command};
use crate::context::AppContext;
use crate::telemetry::init_tracing;

pub async fn run(cli: Cli) -> Result<()> {
    if let Some(config) = &cli.config {
        std::env::set_var(CONFIG_ENV, config);
    }
    let config = AppConfig::load().await?;
    let _guard = init_tracing(&config)?;

    let mut context = AppContext::new(&config).await?;
    if let Some(path) = cli.character {
        context = context.with_character_path(path);
    }

    let output = execute(&mut context, cli.command).await?;
    if !output.is_null() {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

/// Runs one command against the context and returns its JSON output.
pub async fn execute(context: &mut AppContext, command: Command) -> Result<Value> {
    let state = &mut context.state;
    let output = match command {
        Command::Groups => json!(list_groups(state)),
        Command::Search {
            text,
            group,
            extended,
            lockable,
            limit,
        } => json!(search_catalog(
            state,
            CatalogQuery {
                text,
                group,
                extended_only: extended,
                lockable_only: lockable,
                limit,
            }
        )),
        Command::Describe { group, asset } => json!(describe_asset(state, &group, &asset)?),
        Command::Locks => json!(list_locks(state)),
        Command::List => Value::Array(
            list_outfits(state)
                .into_iter()
                .map(|summary| {
                    json!({
                        "name": summary.name,
                        "description": summary.description,
                        "itemCount": summary.item_count,
                        "savedAt": summary.saved_at.and_then(format_millis),
                    })
                })
                .collect(),
        ),
        Command::Show { name } => json!(get_outfit(state, &name)?),
        Command::Create { name, description } => {
            let outfit = create_outfit(&name, &description);
            save_outfit(state, &outfit)?;
            json!({ "created": name })
        }
        Command::AddItem(args) => {
            let mut outfit = get_outfit(state, &args.outfit)?;
            let item = item_from_args(state, &args)?;
            add_item(state, &mut outfit, item)?;
            save_outfit(state, &outfit)?;
            json!(outfit)
        }
        Command::RemoveItem { outfit, group } => {
            let mut config = get_outfit(state, &outfit)?;
            remove_item(&mut config, &group);
            save_outfit(state, &config)?;
            json!(config)
        }
        Command::Delete { name } => {
            delete_outfit(state, &name)?;
            json!({ "deleted": name })
        }
        Command::Rename { old_name, new_name } => {
            rename_outfit(state, &old_name, &new_name)?;
            json!({ "renamed": old_name, "to": new_name.trim() })
        }
        Command::Diff { from, to } => json!(diff_stored_outfits(state, &from, &to)?),
        Command::Capture {
            name,
            description,
            include_locks,
        } => {
            let character = context.load_character().await?;
            let state = &mut context.state;
            let mut outfit = capture_from_live_target(state, &character, &name, include_locks);
            outfit.description = description;
            save_outfit(state, &outfit)?;
            json!(outfit)
        }
        Command::Apply {
            name,
            no_strip,
            no_locks,
            groups,
        } => {
            let mut character = context.load_character().await?;
            let options = ApplyOptions {
                strip_first: context.state.config.strip_first && !no_strip,
                apply_locks: context.state.config.apply_locks && !no_locks,
                target_groups: (!groups.is_empty()).then_some(groups),
            };
            let report = apply_outfit(
                &context.state,
                &mut character,
                OutfitSource::Named(name),
                &options,
            )?;
            context.save_character(&character).await?;
            debug!(metrics = %context.state.metrics.render_prometheus(), "apply finished");
            json!(report)
        }
        Command::Login => {
            let mut character = context.load_character().await?;
            let outcome = on_login(&context.state, &mut character);
            info!(?outcome, "login hook finished");
            match &outcome {
                LoginOutcome::Applied { outfit, report } => {
                    context.save_character(&character).await?;
                    json!({ "applied": outfit, "report": report })
                }
                other => json!({ "applied": Value::Null, "outcome": format!("{other:?}") }),
            }
        }
        Command::Export { output } => {
            let text = export_outfits(state)?;
            match output {
                Some(path) => {
                    fs::write(&path, text)
                        .await
                        .with_context(|| format!("write {path}"))?;
                    json!({ "exported": path })
                }
                None => serde_json::from_str(&text)?,
            }
        }
        Command::Import { path } => {
            let text = fs::read_to_string(&path)
                .await
                .with_context(|| format!("read {path}"))?;
            import_outfits(state, &text)?;
            json!({ "imported": path, "outfits": state.store.outfit_names() })
        }
        Command::Reset { yes } => {
            if !yes {
                bail!("reset drops every stored outfit; pass --yes to confirm");
            }
            reset_store(state)?;
            json!({ "reset": true })
        }
        Command::Settings { key, value } => match (key, value) {
            (None, _) => json!(current_settings(state)),
            (Some(key), None) => state.store.get_setting(&key).unwrap_or(Value::Null),
            (Some(key), Some(raw)) => {
                update_setting(state, &key, parse_value(&raw))?;
                json!(current_settings(state))
            }
        },
        Command::Metrics => Value::String(context.state.metrics.render_prometheus()),
    };
    Ok(output)
}

fn item_from_args(
    state: &AppState,
    args: &AddItemArgs,
) -> Result<ItemConfig> {
    let mut item = ItemConfig::new(&args.group, &args.asset);
    if let Some(color) = &args.color {
        item = item.with_color(parse_color(color));
    }
    if let Some(subtype) = &args.subtype {
        item = item.with_subtype(subtype);
    }
    for pair in &args.properties {
        let (key, value) = split_pair(pair)?;
        item = item.with_property(key, value);
    }
    for effect in &args.effects {
        item = item.with_effect(effect);
    }
    if let Some(kind) = &args.lock {
        let mut overrides = PropertyBag::new();
        for pair in &args.lock_fields {
            let (key, value) = split_pair(pair)?;
            overrides.insert(key.to_string(), value);
        }
        item = item.with_lock(build_lock(state, kind, Some(&overrides))?);
    } else if !args.lock_fields.is_empty() {
        bail!("--lock-field requires --lock");
    }
    Ok(item)
}

fn split_pair(pair: &str) -> Result<(&str, Value)> {
    let (key, raw) = pair
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{pair}'"))?;
    let key = key.trim();
    if key.is_empty() {
        bail!("empty key in '{pair}'");
    }
    Ok((key, parse_value(raw)))
}

/// JSON when it parses, plain text otherwise.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn parse_color(raw: &str) -> ColorSpec {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(layers) => ColorSpec::Layers(layers),
        Err(_) => ColorSpec::Single(raw.to_string()),
    }
}

fn format_millis(ms: i64) -> Option<String> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_fall_back_to_text() {
        assert_eq!(parse_value("12"), json!(12));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("Hogtied"), json!("Hogtied"));
    }

    #[test]
    fn colors_accept_layer_arrays() {
        assert_eq!(parse_color("Red"), ColorSpec::from("Red"));
        assert_eq!(
            parse_color(r#"["Red","Black"]"#),
            ColorSpec::Layers(vec!["Red".to_string(), "Black".to_string()])
        );
    }

    #[test]
    fn pairs_need_a_key() {
        assert_eq!(split_pair("Difficulty=4").unwrap(), ("Difficulty", json!(4)));
        assert!(split_pair("=4").is_err());
        assert!(split_pair("Difficulty").is_err());
    }

    #[test]
    fn millis_are_rendered_in_utc() {
        assert_eq!(
            format_millis(0).as_deref(),
            Some("1970-01-01 00:00:00 UTC")
        );
    }
}
