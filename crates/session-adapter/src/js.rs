//! Script builders for locator resolution and element interaction
//!
//! Every user-supplied string is embedded as a serde_json-encoded literal,
//! never by direct interpolation. Action scripts return a status object so
//! the caller can map page conditions onto the error taxonomy.

use action_kit::{DriverError, Locator};

/// Encode a string as a JS literal.
pub fn js_string(value: &str) -> Result<String, DriverError> {
    serde_json::to_string(value)
        .map_err(|err| DriverError::Backend(format!("literal encoding failed: {err}")))
}

/// Expression evaluating to the matched element or `null`.
pub fn lookup_expr(locator: &Locator) -> Result<String, DriverError> {
    match locator {
        Locator::Id(id) => {
            let literal = js_string(id)?;
            Ok(format!("document.getElementById({literal})"))
        }
        Locator::LinkText(text) => {
            let literal = js_string(text)?;
            Ok(format!(
                "(Array.from(document.querySelectorAll('a')).find((a) => (a.textContent || '').trim() === {literal}) || null)"
            ))
        }
        Locator::AttrValue { tag, attr, value } => {
            let selector = format!("{tag}[{attr}={}]", js_string(value)?);
            let literal = js_string(&selector)?;
            Ok(format!("document.querySelector({literal})"))
        }
    }
}

pub fn exists_expr(locator: &Locator) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    Ok(format!("(() => !!({lookup}))()"))
}

pub fn visible_expr(locator: &Locator) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    Ok(format!(
        "(() => {{\n\
            const el = {lookup};\n\
            if (!el) {{ return false; }}\n\
            const style = window.getComputedStyle(el);\n\
            const rect = el.getBoundingClientRect();\n\
            return style.visibility !== 'hidden' && style.display !== 'none'\n\
                && (rect.width > 0 || rect.height > 0 || el.getClientRects().length > 0);\n\
        }})()"
    ))
}

pub fn clickable_expr(locator: &Locator) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    Ok(format!(
        "(() => {{\n\
            const el = {lookup};\n\
            if (!el || el.disabled) {{ return false; }}\n\
            const style = window.getComputedStyle(el);\n\
            const rect = el.getBoundingClientRect();\n\
            return style.visibility !== 'hidden' && style.display !== 'none'\n\
                && (rect.width > 0 || rect.height > 0 || el.getClientRects().length > 0);\n\
        }})()"
    ))
}

pub fn scroll_expr(locator: &Locator) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    Ok(format!(
        "(() => {{\n\
            const el = {lookup};\n\
            if (!el) {{ return {{ status: 'missing' }}; }}\n\
            el.scrollIntoView(true);\n\
            return {{ status: 'ok' }};\n\
        }})()"
    ))
}

pub fn click_expr(locator: &Locator) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    Ok(format!(
        "(() => {{\n\
            const el = {lookup};\n\
            if (!el) {{ return {{ status: 'missing' }}; }}\n\
            if (el.disabled) {{ return {{ status: 'disabled' }}; }}\n\
            el.click();\n\
            return {{ status: 'ok' }};\n\
        }})()"
    ))
}

pub fn clear_and_type_expr(locator: &Locator, text: &str) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    let literal = js_string(text)?;
    Ok(format!(
        "(() => {{\n\
            const el = {lookup};\n\
            if (!el) {{ return {{ status: 'missing' }}; }}\n\
            if (el.disabled || el.readOnly) {{ return {{ status: 'disabled' }}; }}\n\
            el.focus();\n\
            el.value = '';\n\
            el.value = {literal};\n\
            el.dispatchEvent(new Event('input', {{ bubbles: true }}));\n\
            el.dispatchEvent(new Event('change', {{ bubbles: true }}));\n\
            return {{ status: 'ok' }};\n\
        }})()"
    ))
}

pub fn option_labels_expr(locator: &Locator) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    Ok(format!(
        "(() => {{\n\
            const el = {lookup};\n\
            if (!el) {{ return {{ status: 'missing' }}; }}\n\
            if (!el.options) {{ return {{ status: 'not-select' }}; }}\n\
            const labels = Array.from(el.options).map((o) => (o.text || '').trim());\n\
            return {{ status: 'ok', labels }};\n\
        }})()"
    ))
}

pub fn select_index_expr(locator: &Locator, index: usize) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    Ok(format!(
        "(() => {{\n\
            const el = {lookup};\n\
            if (!el) {{ return {{ status: 'missing' }}; }}\n\
            if (!el.options) {{ return {{ status: 'not-select' }}; }}\n\
            if ({index} >= el.options.length) {{ return {{ status: 'out-of-range' }}; }}\n\
            el.selectedIndex = {index};\n\
            el.dispatchEvent(new Event('change', {{ bubbles: true }}));\n\
            return {{ status: 'ok' }};\n\
        }})()"
    ))
}

pub fn select_label_expr(locator: &Locator, label: &str) -> Result<String, DriverError> {
    let lookup = lookup_expr(locator)?;
    let literal = js_string(label)?;
    Ok(format!(
        "(() => {{\n\
            const el = {lookup};\n\
            if (!el) {{ return {{ status: 'missing' }}; }}\n\
            if (!el.options) {{ return {{ status: 'not-select' }}; }}\n\
            const target = {literal};\n\
            const index = Array.from(el.options).findIndex((o) => (o.text || '').trim() === target);\n\
            if (index < 0) {{ return {{ status: 'option-missing' }}; }}\n\
            el.selectedIndex = index;\n\
            el.dispatchEvent(new Event('change', {{ bubbles: true }}));\n\
            return {{ status: 'ok' }};\n\
        }})()"
    ))
}

pub fn contains_text_expr(needle: &str) -> Result<String, DriverError> {
    let literal = js_string(needle)?;
    Ok(format!(
        "(() => (((document.body && document.body.innerText) || '').includes({literal})))()"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_lookup_uses_encoded_literal() {
        let expr = lookup_expr(&Locator::id("fromAccountId")).unwrap();
        assert_eq!(expr, "document.getElementById(\"fromAccountId\")");
    }

    #[test]
    fn link_text_with_quotes_is_escaped() {
        let expr = lookup_expr(&Locator::link_text("Say \"hi\"")).unwrap();
        assert!(expr.contains("\\\"hi\\\""));
        assert!(!expr.contains("=== Say"));
    }

    #[test]
    fn attr_value_builds_quoted_css_selector() {
        let expr = lookup_expr(&Locator::input_value("Open New Account")).unwrap();
        assert!(expr.contains("querySelector"));
        assert!(expr.contains("input[value="));
        assert!(expr.contains("Open New Account"));
    }

    #[test]
    fn type_script_clears_before_inserting() {
        let expr = clear_and_type_expr(&Locator::id("amount"), "100").unwrap();
        let clear = expr.find("el.value = '';").expect("clear present");
        let insert = expr.find("el.value = \"100\";").expect("insert present");
        assert!(clear < insert);
    }

    #[test]
    fn contains_text_encodes_needle() {
        let expr = contains_text_expr("Account Opened!").unwrap();
        assert!(expr.contains("\"Account Opened!\""));
    }
}
