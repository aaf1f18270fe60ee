use serde_json::Value;

/// 将令吉金额转换为网关要求的仙（cent）整数。
///
/// 乘以 100 后截断取整，与网关自身的算法一致。
/// 转换只在构建 payload 时进行一次，不会累积。
pub fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0) as i64
}

pub fn value_to_string(value: &Value) -> String {
    if value.is_string() {
        value.as_str().unwrap().to_string()
    } else {
        value.to_string()
    }
}

/// 网关返回的数字不稳定：`billpaymentStatus` 有时是 `"1"`，有时是 `1`
pub fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{amount_to_cents, value_to_i64, value_to_string};

    #[test]
    fn cents_conversion() {
        assert_eq!(amount_to_cents(10.00), 1000);
        assert_eq!(amount_to_cents(0.01), 1);
        assert_eq!(amount_to_cents(123.45), 12345);
    }

    #[test]
    fn cents_conversion_truncates() {
        // 29.99 * 100 在浮点下略小于 2999，网关截断，这里也截断
        assert_eq!(amount_to_cents(29.99), 2998);
    }

    #[test]
    fn cents_conversion_is_not_cumulative() {
        let amount = 10.00;
        assert_eq!(amount_to_cents(amount), 1000);
        assert_eq!(amount_to_cents(amount), 1000);
    }

    #[test]
    fn i64_coercion() {
        assert_eq!(value_to_i64(&json!(3)), Some(3));
        assert_eq!(value_to_i64(&json!("4")), Some(4));
        assert_eq!(value_to_i64(&json!(" 1 ")), Some(1));
        assert_eq!(value_to_i64(&json!("x")), None);
        assert_eq!(value_to_i64(&json!(null)), None);
    }

    #[test]
    fn string_coercion() {
        assert_eq!(value_to_string(&json!("abc")), "abc");
        assert_eq!(value_to_string(&json!(100)), "100");
    }
}
