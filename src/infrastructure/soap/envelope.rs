//! SOAP request construction and fault inspection.

use crate::domain::xml_tree::{XmlValue, try_keys};

/// Target namespace of the CRBR review API.
pub const CRBR_NAMESPACE: &str =
    "http://www.mf.gov.pl/uslugiBiznesowe/uslugiESB/AP/ApiPrzegladoweCRBR/2022/12/01";

/// Operation returning company filings with their beneficial owners.
pub const OPERATION: &str = "PobierzInformacjeOSpolkachIBeneficjentach";

const ENVELOPE: &[&str] = &[
    "soap:Envelope",
    "soapenv:Envelope",
    "env:Envelope",
    "S:Envelope",
    "Envelope",
];
const BODY: &[&str] = &["soap:Body", "soapenv:Body", "env:Body", "S:Body", "Body"];
const FAULT: &[&str] = &["soap:Fault", "soapenv:Fault", "env:Fault", "S:Fault", "Fault"];
const FAULT_CODE: &[&str] = &["faultcode", "soap:faultcode", "env:faultcode"];
const FAULT_CODE_12: &[&str] = &["env:Code", "soap:Code", "Code"];
const FAULT_VALUE_12: &[&str] = &["env:Value", "soap:Value", "Value"];

/// Builds the SOAP 1.1 request envelope for a NIP lookup.
pub fn build_request(nip: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:crbr="{ns}">"#,
            "<soapenv:Header/>",
            "<soapenv:Body>",
            "<crbr:{op}><crbr:nip>{nip}</crbr:nip></crbr:{op}>",
            "</soapenv:Body>",
            "</soapenv:Envelope>"
        ),
        ns = CRBR_NAMESPACE,
        op = OPERATION,
        nip = escape_xml(nip),
    )
}

/// Extracts the fault code from a SOAP 1.1 or 1.2 fault document.
///
/// Returns `None` if the document is not XML or carries no fault.
pub fn fault_code(document: &str) -> Option<String> {
    let tree = XmlValue::parse(document).ok()?;
    let envelope = try_keys(&tree, ENVELOPE)?;
    let body = try_keys(envelope, BODY)?;
    let fault = try_keys(body, FAULT)?;

    let code = match try_keys(fault, FAULT_CODE) {
        Some(code) => code,
        None => try_keys(try_keys(fault, FAULT_CODE_12)?, FAULT_VALUE_12)?,
    };

    code.as_text().map(|text| text.trim().to_string())
}

/// Returns `true` for `Client` (SOAP 1.1) or `Sender` (SOAP 1.2) codes under any prefix.
pub fn is_client_fault(code: &str) -> bool {
    let local = code.rsplit(':').next().unwrap_or(code);
    local == "Client" || local == "Sender"
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
