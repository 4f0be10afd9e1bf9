//! Extraction of beneficial owners from a CRBR `PobierzZgloszenia` response.
//!
//! # Document shape
//!
//! ```text
//! soap:Envelope
//! └─ soap:Body
//!    └─ ns3:PobierzZgloszeniaOdpowiedz
//!       └─ PobierzZgloszeniaOdpowiedzDane
//!          └─ ns2:ListaZgloszenSpolki
//!             └─ ns2:ZgloszenieSpolki                    (one or many)
//!                └─ ns2:ListaBeneficjentowRzeczywistych
//!                   └─ ns2:BeneficjentRzeczywisty        (one or many)
//!                      ├─ ns2:PierwszeImie
//!                      ├─ ns2:Nazwisko
//!                      └─ ns2:PESEL
//! ```
//!
//! The registry signals "no beneficial owners" by truncating this nesting, so
//! a missing node at any level yields an empty list rather than an error.
//! Prefixes vary between responses; every step is looked up through an
//! ordered candidate list ending with the unprefixed name.

use thiserror::Error;

use crate::domain::entities::BeneficialOwner;
use crate::domain::xml_tree::{XmlValue, as_sequence, try_keys};

const ENVELOPE: &[&str] = &[
    "soap:Envelope",
    "soapenv:Envelope",
    "env:Envelope",
    "S:Envelope",
    "Envelope",
];
const BODY: &[&str] = &["soap:Body", "soapenv:Body", "env:Body", "S:Body", "Body"];
const RESPONSE: &[&str] = &["ns3:PobierzZgloszeniaOdpowiedz", "PobierzZgloszeniaOdpowiedz"];
const RESPONSE_DATA: &[&str] = &[
    "PobierzZgloszeniaOdpowiedzDane",
    "ns3:PobierzZgloszeniaOdpowiedzDane",
];
const FILING_LIST: &[&str] = &["ns2:ListaZgloszenSpolki", "ListaZgloszenSpolki"];
const FILING: &[&str] = &["ns2:ZgloszenieSpolki", "ZgloszenieSpolki"];
const OWNER_LIST: &[&str] = &[
    "ns2:ListaBeneficjentowRzeczywistych",
    "ListaBeneficjentowRzeczywistych",
];
const OWNER: &[&str] = &["ns2:BeneficjentRzeczywisty", "BeneficjentRzeczywisty"];
const FIRST_NAME: &[&str] = &["ns2:PierwszeImie", "PierwszeImie"];
const LAST_NAME: &[&str] = &["ns2:Nazwisko", "Nazwisko"];
const NATIONAL_ID: &[&str] = &["ns2:PESEL", "PESEL"];

/// Errors that can occur while extracting beneficial owners.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Malformed registry document: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Extracts all beneficial owners from a registry response, in document order.
///
/// Filings are visited in order and owners within each filing in order.
/// Duplicates are kept.
///
/// # Errors
///
/// Returns [`ExtractError::Parse`] only when the document is not well-formed
/// XML. Structural gaps produce `Ok(vec![])` or skip the affected filing.
pub fn extract_beneficial_owners(document: &str) -> Result<Vec<BeneficialOwner>, ExtractError> {
    let tree = XmlValue::parse(document)?;

    let Some(filings) = locate_filings(&tree) else {
        return Ok(Vec::new());
    };

    let owners = as_sequence(filings)
        .into_iter()
        .filter_map(|filing| try_keys(filing, OWNER_LIST))
        .filter_map(|list| try_keys(list, OWNER))
        .flat_map(as_sequence)
        .map(read_owner)
        .collect();

    Ok(owners)
}

/// Async entry point; parsing runs on the blocking pool.
///
/// # Errors
///
/// See [`extract_beneficial_owners`]. Additionally returns
/// [`ExtractError::Task`] if the parsing task panics.
pub async fn parse_beneficial_owners(
    document: String,
) -> Result<Vec<BeneficialOwner>, ExtractError> {
    tokio::task::spawn_blocking(move || extract_beneficial_owners(&document)).await?
}

fn locate_filings(tree: &XmlValue) -> Option<&XmlValue> {
    let envelope = try_keys(tree, ENVELOPE)?;
    let body = try_keys(envelope, BODY)?;
    let response = try_keys(body, RESPONSE)?;
    let data = try_keys(response, RESPONSE_DATA)?;
    let list = try_keys(data, FILING_LIST)?;
    try_keys(list, FILING)
}

fn read_owner(node: &XmlValue) -> BeneficialOwner {
    BeneficialOwner::new(
        text_field(node, FIRST_NAME),
        text_field(node, LAST_NAME),
        text_field(node, NATIONAL_ID),
    )
}

/// First non-empty text among `candidates`.
fn text_field(node: &XmlValue, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|key| node.get(key))
        .filter_map(XmlValue::as_text)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = r#"xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns2="http://www.mf.gov.pl/schematy/crbr/typy" xmlns:ns3="http://www.mf.gov.pl/uslugiBiznesowe/uslugiESB/AP/ApiPrzegladoweCRBR/2022/12/01""#;

    fn owner_xml(first: &str, last: &str, pesel: &str) -> String {
        format!(
            "<ns2:BeneficjentRzeczywisty>\
               <ns2:PierwszeImie>{first}</ns2:PierwszeImie>\
               <ns2:Nazwisko>{last}</ns2:Nazwisko>\
               <ns2:PESEL>{pesel}</ns2:PESEL>\
             </ns2:BeneficjentRzeczywisty>"
        )
    }

    fn filing_xml(owners: &[String]) -> String {
        format!(
            "<ns2:ZgloszenieSpolki>\
               <ns2:ListaBeneficjentowRzeczywistych>{}</ns2:ListaBeneficjentowRzeczywistych>\
             </ns2:ZgloszenieSpolki>",
            owners.concat()
        )
    }

    fn document(filings: &[String]) -> String {
        format!(
            "<soap:Envelope {NS}><soap:Body>\
               <ns3:PobierzZgloszeniaOdpowiedz>\
                 <PobierzZgloszeniaOdpowiedzDane>\
                   <ns2:ListaZgloszenSpolki>{}</ns2:ListaZgloszenSpolki>\
                 </PobierzZgloszeniaOdpowiedzDane>\
               </ns3:PobierzZgloszeniaOdpowiedz>\
             </soap:Body></soap:Envelope>",
            filings.concat()
        )
    }

    fn owner(first: &str, last: &str, pesel: &str) -> BeneficialOwner {
        BeneficialOwner::new(
            Some(first.to_string()),
            Some(last.to_string()),
            Some(pesel.to_string()),
        )
    }

    #[test]
    fn test_single_filing_single_owner() {
        let xml = document(&[filing_xml(&[owner_xml("Jan", "Kowalski", "80010112345")])]);

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(owners, vec![owner("Jan", "Kowalski", "80010112345")]);
    }

    #[test]
    fn test_two_owners_keep_document_order() {
        let xml = document(&[filing_xml(&[
            owner_xml("Anna", "Nowak", "90020254321"),
            owner_xml("Piotr", "Zielinski", "75030398765"),
        ])]);

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(
            owners,
            vec![
                owner("Anna", "Nowak", "90020254321"),
                owner("Piotr", "Zielinski", "75030398765"),
            ]
        );
    }

    #[test]
    fn test_multiple_filings_are_concatenated_without_dedup() {
        let xml = document(&[
            filing_xml(&[owner_xml("Jan", "Kowalski", "80010112345")]),
            filing_xml(&[
                owner_xml("Anna", "Nowak", "90020254321"),
                owner_xml("Jan", "Kowalski", "80010112345"),
            ]),
        ]);

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(
            owners,
            vec![
                owner("Jan", "Kowalski", "80010112345"),
                owner("Anna", "Nowak", "90020254321"),
                owner("Jan", "Kowalski", "80010112345"),
            ]
        );
    }

    #[test]
    fn test_filing_without_owner_list_is_skipped() {
        let empty_filing = "<ns2:ZgloszenieSpolki><ns2:Nip>1234563218</ns2:Nip></ns2:ZgloszenieSpolki>";
        let xml = document(&[
            empty_filing.to_string(),
            filing_xml(&[owner_xml("Anna", "Nowak", "90020254321")]),
        ]);

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(owners, vec![owner("Anna", "Nowak", "90020254321")]);
    }

    #[test]
    fn test_missing_owner_list_returns_empty() {
        let xml = document(&["<ns2:ZgloszenieSpolki><ns2:Nip>1234563218</ns2:Nip></ns2:ZgloszenieSpolki>".to_string()]);

        assert!(extract_beneficial_owners(&xml).unwrap().is_empty());
    }

    #[test]
    fn test_empty_owner_list_returns_empty() {
        let xml = document(&[filing_xml(&[])]);

        assert!(extract_beneficial_owners(&xml).unwrap().is_empty());
    }

    #[test]
    fn test_missing_body_returns_empty() {
        let xml = format!("<soap:Envelope {NS}><soap:Header/></soap:Envelope>");

        assert!(extract_beneficial_owners(&xml).unwrap().is_empty());
    }

    #[test]
    fn test_missing_envelope_returns_empty() {
        let xml = "<PobierzZgloszeniaOdpowiedz><PobierzZgloszeniaOdpowiedzDane/></PobierzZgloszeniaOdpowiedz>";

        assert!(extract_beneficial_owners(xml).unwrap().is_empty());
    }

    #[test]
    fn test_missing_response_returns_empty() {
        let xml = format!("<soap:Envelope {NS}><soap:Body><Other/></soap:Body></soap:Envelope>");

        assert!(extract_beneficial_owners(&xml).unwrap().is_empty());
    }

    #[test]
    fn test_unprefixed_response_and_fields() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
              <soap:Body>
                <PobierzZgloszeniaOdpowiedz xmlns="urn:crbr">
                  <PobierzZgloszeniaOdpowiedzDane>
                    <ListaZgloszenSpolki>
                      <ZgloszenieSpolki>
                        <ListaBeneficjentowRzeczywistych>
                          <BeneficjentRzeczywisty>
                            <PierwszeImie>Ewa</PierwszeImie>
                            <Nazwisko>Wisniewska</Nazwisko>
                            <PESEL>85121212345</PESEL>
                          </BeneficjentRzeczywisty>
                        </ListaBeneficjentowRzeczywistych>
                      </ZgloszenieSpolki>
                    </ListaZgloszenSpolki>
                  </PobierzZgloszeniaOdpowiedzDane>
                </PobierzZgloszeniaOdpowiedz>
              </soap:Body>
            </soap:Envelope>"#;

        let owners = extract_beneficial_owners(xml).unwrap();

        assert_eq!(owners, vec![owner("Ewa", "Wisniewska", "85121212345")]);
    }

    #[test]
    fn test_mixed_field_prefixes() {
        let mixed = "<ns2:BeneficjentRzeczywisty xmlns:x=\"urn:x\">\
               <ns2:PierwszeImie>Jan</ns2:PierwszeImie>\
               <Nazwisko xmlns=\"urn:plain\">Kowalski</Nazwisko>\
             </ns2:BeneficjentRzeczywisty>"
            .to_string();
        let xml = document(&[filing_xml(&[mixed])]);

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(
            owners,
            vec![BeneficialOwner::new(
                Some("Jan".to_string()),
                Some("Kowalski".to_string()),
                None,
            )]
        );
    }

    #[test]
    fn test_fields_found_when_namespace_has_second_prefix() {
        let aliased = "<ns2:BeneficjentRzeczywisty xmlns:typy=\"http://www.mf.gov.pl/schematy/crbr/typy\">\
               <ns2:PierwszeImie>Jan</ns2:PierwszeImie>\
               <ns2:Nazwisko>Kowalski</ns2:Nazwisko>\
               <ns2:PESEL>80010112345</ns2:PESEL>\
             </ns2:BeneficjentRzeczywisty>"
            .to_string();
        let xml = document(&[filing_xml(&[aliased])]).replacen(
            "<soap:Envelope ",
            "<soap:Envelope xmlns:typy=\"http://www.mf.gov.pl/schematy/crbr/typy\" ",
            1,
        );

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(owners, vec![owner("Jan", "Kowalski", "80010112345")]);
    }

    #[test]
    fn test_soapenv_and_s_envelope_prefixes() {
        let soap = document(&[filing_xml(&[owner_xml("Jan", "Kowalski", "80010112345")])]);

        for prefix in ["soapenv", "S"] {
            let xml = soap
                .replace("soap:", &format!("{prefix}:"))
                .replace("xmlns:soap=", &format!("xmlns:{prefix}="));

            let owners = extract_beneficial_owners(&xml).unwrap();

            assert_eq!(owners, vec![owner("Jan", "Kowalski", "80010112345")]);
        }
    }

    #[test]
    fn test_missing_fields_are_none_not_dropped() {
        let bare = "<ns2:BeneficjentRzeczywisty><ns2:Obywatelstwo>PL</ns2:Obywatelstwo></ns2:BeneficjentRzeczywisty>".to_string();
        let xml = document(&[filing_xml(&[bare])]);

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(owners, vec![BeneficialOwner::default()]);
    }

    #[test]
    fn test_empty_prefixed_field_falls_back_to_unprefixed() {
        let owner_node = "<ns2:BeneficjentRzeczywisty>\
               <ns2:PierwszeImie/>\
               <PierwszeImie xmlns=\"urn:plain\">Jan</PierwszeImie>\
             </ns2:BeneficjentRzeczywisty>"
            .to_string();
        let xml = document(&[filing_xml(&[owner_node])]);

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(owners[0].first_name.as_deref(), Some("Jan"));
    }

    #[test]
    fn test_field_with_attributes_keeps_text() {
        let owner_node = "<ns2:BeneficjentRzeczywisty xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
               <ns2:PESEL xsi:type=\"string\">80010112345</ns2:PESEL>\
             </ns2:BeneficjentRzeczywisty>"
            .to_string();
        let xml = document(&[filing_xml(&[owner_node])]);

        let owners = extract_beneficial_owners(&xml).unwrap();

        assert_eq!(owners[0].national_id.as_deref(), Some("80010112345"));
    }

    #[test]
    fn test_malformed_document_is_error() {
        let result = extract_beneficial_owners("<soap:Envelope><soap:Body>");

        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[tokio::test]
    async fn test_async_entry_point() {
        let xml = document(&[filing_xml(&[owner_xml("Jan", "Kowalski", "80010112345")])]);

        let owners = parse_beneficial_owners(xml).await.unwrap();
        assert_eq!(owners.len(), 1);

        let result = parse_beneficial_owners("<broken".to_string()).await;
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }
}
