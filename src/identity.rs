/// Session credentials and account id of the signed-in player.
///
/// Produced by the authentication flow, which lives outside this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub access_token: String,
    pub entitlements_token: String,
    /// Region as reported by the auth flow ("eu", "na", "latam", ...)
    pub region: String,
    /// Player UUID ("subject" in match payloads)
    pub puuid: String,
}

impl Identity {
    pub fn new(access_token: &str, entitlements_token: &str, region: &str, puuid: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            entitlements_token: entitlements_token.to_string(),
            region: region.to_string(),
            puuid: puuid.to_string(),
        }
    }

    /// All four fields are required before any player-data request is made
    pub fn is_complete(&self) -> bool {
        !self.access_token.trim().is_empty()
            && !self.entitlements_token.trim().is_empty()
            && !self.region.trim().is_empty()
            && !self.puuid.trim().is_empty()
    }
}
