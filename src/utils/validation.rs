use crate::utils::error::{ProbeError, Result};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: String) -> ProbeError {
    ProbeError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty".to_string()));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_method(field_name: &str, value: &str) -> Result<Method> {
    validate_non_empty_string(field_name, value)?;
    Method::from_bytes(value.as_bytes())
        .map_err(|e| invalid(field_name, value, format!("Invalid HTTP method: {}", e)))
}

pub fn validate_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| invalid("headers", name, format!("Invalid header name: {}", e)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| invalid(name, value, format!("Invalid header value: {}", e)))?;
    Ok((header_name, header_value))
}
