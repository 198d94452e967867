use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Claims the villa backend puts in its bearer tokens. Only the role-bearing
/// fields matter to the client; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub roles: Option<RoleField>,
    #[serde(default)]
    pub role: Option<RoleField>,
    #[serde(default)]
    pub authorities: Option<RoleField>,
}

/// The backend has emitted roles both as a plain string and as an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RoleField {
    Single(String),
    Many(Vec<String>),
}

impl RoleField {
    /// First role when an array, the value itself otherwise.
    pub fn first(&self) -> Option<&str> {
        match self {
            RoleField::Single(s) => Some(s.as_str()),
            RoleField::Many(v) => v.first().map(|s| s.as_str()),
        }
    }
}

impl TokenClaims {
    /// roles > role > authorities, matching the order the site has always
    /// probed the payload in.
    pub fn role(&self) -> Option<&str> {
        self.roles
            .as_ref()
            .or(self.role.as_ref())
            .or(self.authorities.as_ref())
            .and_then(|f| f.first())
    }
}

/// Decodes the payload segment of a JWT without verifying the signature.
/// Verification happens server-side; the client only needs a best-effort
/// read of the role claim.
pub fn decode_payload(token: &str) -> Result<TokenClaims, String> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| "token has no payload segment".to_string())?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| format!("base64 decode failed: {}", e))?;
    serde_json::from_slice(&bytes).map_err(|e| format!("payload is not valid JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(json: &str) -> String {
        format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(json))
    }

    #[test]
    fn reads_role_from_string_claim() {
        let token = token_with_payload(r#"{"role":"ADMIN","sub":"7"}"#);
        let claims = decode_payload(&token).unwrap();
        assert_eq!(claims.role(), Some("ADMIN"));
    }

    #[test]
    fn roles_array_wins_and_takes_first() {
        let token = token_with_payload(r#"{"roles":["GUIDE","USER"],"role":"USER"}"#);
        let claims = decode_payload(&token).unwrap();
        assert_eq!(claims.role(), Some("GUIDE"));
    }

    #[test]
    fn authorities_is_the_last_fallback() {
        let token = token_with_payload(r#"{"authorities":["ROLE_MANAGER"]}"#);
        let claims = decode_payload(&token).unwrap();
        assert_eq!(claims.role(), Some("ROLE_MANAGER"));
    }

    #[test]
    fn garbage_payload_is_an_error_not_a_panic() {
        assert!(decode_payload("abc").is_err());
        assert!(decode_payload("abc.!!!.ghi").is_err());
        let not_json = format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(decode_payload(&not_json).is_err());
    }

    #[test]
    fn payload_without_role_claims_decodes_to_none() {
        let token = token_with_payload(r#"{"sub":"42","exp":1}"#);
        let claims = decode_payload(&token).unwrap();
        assert_eq!(claims.role(), None);
    }
}
