use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Patrol crew call sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Crew {
    #[serde(rename = "АП-1")]
    Ap1,
    #[serde(rename = "АП-2")]
    Ap2,
    #[serde(rename = "АП-3")]
    Ap3,
    #[serde(rename = "ППС-101")]
    Pps101,
    #[serde(rename = "ППС-102")]
    Pps102,
    #[serde(rename = "ППС-103")]
    Pps103,
}

impl Crew {
    pub fn call_sign(&self) -> &'static str {
        match self {
            Crew::Ap1 => "АП-1",
            Crew::Ap2 => "АП-2",
            Crew::Ap3 => "АП-3",
            Crew::Pps101 => "ППС-101",
            Crew::Pps102 => "ППС-102",
            Crew::Pps103 => "ППС-103",
        }
    }
}

impl std::fmt::Display for Crew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.call_sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crew_serializes_as_call_sign() {
        for crew in [
            Crew::Ap1,
            Crew::Ap2,
            Crew::Ap3,
            Crew::Pps101,
            Crew::Pps102,
            Crew::Pps103,
        ] {
            let json = serde_json::to_string(&crew).unwrap();
            assert_eq!(json, format!("\"{}\"", crew.call_sign()));
        }

        let parsed: Crew = serde_json::from_str("\"ППС-102\"").unwrap();
        assert_eq!(parsed, Crew::Pps102);
    }
}
