//! Typed lookup of slash command options.

use crate::{
    model::interaction::{CommandOption, OptionValue},
    server::{
        model::discord::InviteParams,
        service::registrar::{EXPIRY_OPTION, USES_OPTION},
    },
};

pub const DEFAULT_EXPIRY_HOURS: u32 = 24;
/// Discord caps invite lifetime at 7 days.
pub const MAX_EXPIRY_HOURS: u32 = 168;
/// 0 means unlimited.
pub const DEFAULT_MAX_USES: u8 = 0;
pub const MAX_INVITE_USES: u8 = 100;

const SECONDS_PER_HOUR: u32 = 3600;

/// Effective settings for `/invite` after defaults and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InviteOptions {
    /// 0 never expires.
    pub expiry_hours: u32,
    /// 0 is unlimited.
    pub max_uses: u8,
}

impl InviteOptions {
    pub fn max_age_secs(&self) -> u32 {
        self.expiry_hours * SECONDS_PER_HOUR
    }

    pub fn to_params(self) -> InviteParams {
        InviteParams {
            max_age: self.max_age_secs(),
            max_uses: self.max_uses,
            temporary: false,
        }
    }
}

impl Default for InviteOptions {
    fn default() -> Self {
        Self {
            expiry_hours: DEFAULT_EXPIRY_HOURS,
            max_uses: DEFAULT_MAX_USES,
        }
    }
}

/// Resolves `expiry` and `uses` from the invocation's options.
///
/// Missing, non-integer or negative options fall back to the defaults, so a bad
/// `expiry` can never widen into a never-expiring invite. Values above Discord's
/// limits are clamped down to them.
pub fn resolve_invite_options(options: &[CommandOption]) -> InviteOptions {
    let defaults = InviteOptions::default();

    let expiry_hours = integer_option(options, EXPIRY_OPTION)
        .filter(|hours| *hours >= 0)
        .map(|hours| hours.min(i64::from(MAX_EXPIRY_HOURS)) as u32)
        .unwrap_or(defaults.expiry_hours);

    let max_uses = integer_option(options, USES_OPTION)
        .filter(|uses| *uses >= 0)
        .map(|uses| uses.min(i64::from(MAX_INVITE_USES)) as u8)
        .unwrap_or(defaults.max_uses);

    InviteOptions {
        expiry_hours,
        max_uses,
    }
}

/// First option named `name` holding an integer value.
pub fn integer_option(options: &[CommandOption], name: &str) -> Option<i64> {
    options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            Some(OptionValue::Integer(value)) => Some(value),
            _ => None,
        })
}
