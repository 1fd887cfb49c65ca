/// Response structure for the `gettimes` endpoint.
///
/// The server always encodes every field; `Rise`/`Set` hold the literal
/// `"error"` when it could not compute a result.
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TimesResponse {
    /// Moonrise in local time, e.g. "6:15 AM"
    #[serde(default)]
    pub rise: Option<String>,
    /// Moonset in local time
    #[serde(default)]
    pub set: Option<String>,
    /// The moon stays above the horizon all day
    #[serde(default)]
    pub always_above: bool,
    /// The moon stays below the horizon all day
    #[serde(default)]
    pub always_below: bool,
}
