//! Wallet identifier resolution

use tracing::warn;

use crate::error::{Error, Result};
use crate::models::{Notifications, ResolvedAddress};
use crate::provider::ChainDataProvider;

/// Reserved naming-service suffix.
pub const ENS_SUFFIX: &str = ".eth";

/// Resolve a user-supplied identifier to a canonical address.
///
/// Identifiers carrying the ENS suffix go through the provider lookup and
/// are never forwarded unresolved; anything else passes through and is
/// validated as a literal address. No fetch happens on failure.
pub(crate) async fn resolve_identifier(
    provider: &dyn ChainDataProvider,
    identifier: &str,
    notifications: &mut Notifications,
) -> Result<ResolvedAddress> {
    let identifier = identifier.trim();

    let candidate = if identifier.ends_with(ENS_SUFFIX) {
        match provider.resolve_name(identifier).await {
            Ok(Some(address)) => {
                notifications.info("ENS resolved", format!("{} → {}", identifier, address));
                address
            }
            Ok(None) => {
                notifications.error(
                    "ENS resolution failed",
                    format!("{} is not registered", identifier),
                );
                return Err(Error::Resolution(format!("ENS name not found: {}", identifier)));
            }
            Err(e) => {
                warn!("ENS lookup failed for {}: {}", identifier, e);
                notifications.error(
                    "ENS resolution failed",
                    format!("Could not resolve {}", identifier),
                );
                return Err(Error::Resolution(e.to_string()));
            }
        }
    } else {
        identifier.to_string()
    };

    ResolvedAddress::new(&candidate)
}
