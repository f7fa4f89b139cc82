use anyhow::{anyhow, Result};

/// Store ids become part of a file name, so only a conservative charset is allowed.
pub fn validate_store_id(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("store_id is empty"));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(anyhow!(
            "store_id must only contain ASCII letters, digits, '_' or '-'"
        ));
    }
    Ok(())
}

pub fn validate_member_number(value: i64) -> Result<()> {
    if value <= 0 {
        return Err(anyhow!("actor_member_number must be positive"));
    }
    Ok(())
}
