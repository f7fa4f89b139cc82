use tracing::{info, warn};

use crate::commands::{apply_outfit, ApplyOptions, ApplyReport, OutfitSource};
use crate::AppState;
use wardrobe_domain::LiveTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Disabled,
    NoDefaultOutfit,
    Applied { outfit: String, report: ApplyReport },
    Failed { outfit: String, reason: String },
}

/// Session hook run once the host reports a completed login. Applies the
/// default outfit when auto-apply is enabled; locks are never applied here.
pub fn on_login(state: &AppState, target: &mut dyn LiveTarget) -> LoginOutcome {
    let settings = state.store.settings();
    if !settings.auto_apply_on_login {
        return LoginOutcome::Disabled;
    }
    let Some(outfit) = settings
        .default_outfit
        .filter(|name| !name.trim().is_empty())
    else {
        return LoginOutcome::NoDefaultOutfit;
    };

    info!(outfit = %outfit, live_target = %target.label(), "auto-applying default outfit");
    let options = ApplyOptions {
        strip_first: true,
        apply_locks: false,
        target_groups: None,
    };
    match apply_outfit(state, target, OutfitSource::Named(outfit.clone()), &options) {
        Ok(report) => LoginOutcome::Applied { outfit, report },
        Err(err) => {
            warn!(outfit = %outfit, "auto-apply failed: {err}");
            LoginOutcome::Failed {
                outfit,
                reason: err.to_string(),
            }
        }
    }
}
