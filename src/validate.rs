use url::Url;

use crate::error::{Error, ToyyibpayResult};

/// 必填检查。空字符串与未设置同样视为缺失。
pub fn require(field: &str, value: &str) -> ToyyibpayResult<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingParameter(field.to_owned()));
    }

    Ok(())
}

/// 校验邮箱格式：local@domain，domain 须含点号
pub fn email(field: &str, value: &str) -> ToyyibpayResult<()> {
    let mut parts = value.split('@');

    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    };

    if !valid {
        return Err(Error::invalid(field, "invalid email format"));
    }

    Ok(())
}

/// 校验 URL 格式，必须是带 host 的 http/https 地址
pub fn url(field: &str, value: &str) -> ToyyibpayResult<()> {
    match Url::parse(value) {
        Ok(parsed) if parsed.has_host() && matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(Error::invalid(field, "invalid URL format")),
    }
}

/// 金额必须是大于零的有限数
pub fn amount(field: &str, value: f64) -> ToyyibpayResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(field, "amount must be positive"));
    }

    Ok(())
}

/// 枚举成员检查
pub fn one_of(field: &str, value: i64, allowed: &[i64]) -> ToyyibpayResult<()> {
    if !allowed.contains(&value) {
        let allowed = allowed
            .iter()
            .map(|code| code.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        return Err(Error::invalid(
            field,
            &format!("must be one of {}", allowed),
        ));
    }

    Ok(())
}

/// BillCode 只允许字母和数字
pub fn bill_code(field: &str, value: &str) -> ToyyibpayResult<()> {
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::invalid(field, "invalid bill code format"));
    }

    Ok(())
}
