pub fn validate_owner_code(code: &str) -> Result<(), String> {
    if code.is_empty() {
        return Err("Owner code cannot be empty".to_string());
    }
    if code.len() > 64 {
        return Err("Owner code cannot exceed 64 characters".to_string());
    }
    if code.chars().any(|c| c.is_whitespace()) {
        return Err(format!("Owner code '{code}' cannot contain whitespace"));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}
