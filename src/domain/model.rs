use serde::{Deserialize, Deserializer, Serialize};

/// 單一 advocate 紀錄，由外部資料來源建立，本系統只讀
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateRow {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<TextOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<TextOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<Experience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// 單一字串或有序字串列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

/// 年資：數字或數字字串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Experience::Number(n) => f.write_str(&number_to_string(n)),
            Experience::Text(s) => f.write_str(s),
        }
    }
}

/// 整數照原樣，浮點數用最短表示 (15.0 -> "15")
pub fn number_to_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(float_to_string).unwrap_or_else(|| n.to_string())
    }
}

/// 很大或很小的數字改用指數表示，和 JavaScript 的 `String(n)` 一致 (1e+21, 1.5e-7)
fn float_to_string(f: f64) -> String {
    let magnitude = f.abs();
    if magnitude < 1e21 && (magnitude == 0.0 || magnitude >= 1e-6) {
        return f.to_string();
    }

    let exp_form = format!("{:e}", f);
    match exp_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp_form,
    }
}

/// `GET /api/advocates` 的回應格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvocatesResponse {
    pub data: Vec<AdvocateRow>,
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => number_to_string(&n),
    })
}
