//! INPUT_PURPOSE: inputs that collect personal data should declare their
//! autocomplete purpose so browsers and assistive tools can fill them.

use std::sync::LazyLock;

use lumen_core::{EvaluationContext, Finding, Severity, UiNode, WcagCriterion};

use crate::matching::keywords::KeywordTable;
use crate::matching::properties;
use crate::matching::text::{normalize_identifier, unquote};
use crate::rules::control_types;
use crate::rules::Rule;

/// Properties that declare an input's autocomplete purpose.
const AUTOCOMPLETE_KEYS: &[&str] = &[
    "autocomplete",
    "Autocomplete",
    "AutoComplete",
    "AutocompleteType",
    "AutoCompleteType",
    "InputPurpose",
];

/// Identifier fragments per autocomplete token, matched anywhere in the
/// normalized identifier. Earlier groups win, so card and password fragments
/// come before `name`, and `emailaddress` resolves to `email` rather than
/// `street-address`. Fragments must not occur inside a later group's common
/// identifiers: `lname` would capture `fullname` and `legalname`.
static PURPOSES: LazyLock<Option<KeywordTable<&'static str>>> = LazyLock::new(|| {
    let groups: Vec<(&'static str, Vec<&'static str>)> = vec![
        ("cc-number", vec!["cardnumber", "ccnumber", "creditcard", "ccnum"]),
        ("cc-name", vec!["cardholder", "nameoncard", "ccname"]),
        ("cc-exp", vec!["cardexpiry", "expiry", "expiration", "ccexp", "expdate"]),
        ("cc-csc", vec!["cvv", "cvc", "csc", "securitycode"]),
        ("new-password", vec!["newpassword", "confirmpassword", "passwordconfirm", "repeatpassword"]),
        ("current-password", vec!["password", "passwd", "pwd"]),
        ("username", vec!["username", "userid", "login"]),
        ("given-name", vec!["firstname", "givenname", "forename"]),
        ("family-name", vec!["lastname", "surname", "familyname"]),
        ("organization-title", vec!["jobtitle", "organizationtitle"]),
        ("organization", vec!["company", "organization", "organisation", "employer"]),
        ("email", vec!["email", "emailaddress"]),
        ("tel", vec!["phone", "telephone", "mobile", "cellnumber"]),
        ("postal-code", vec!["postalcode", "postcode", "zip"]),
        ("street-address", vec!["streetaddress", "address", "street"]),
        ("address-level2", vec!["city", "town"]),
        ("address-level1", vec!["state", "province", "region"]),
        ("country-name", vec!["country"]),
        ("bday", vec!["birthday", "birthdate", "dateofbirth", "dob"]),
        ("name", vec!["fullname", "legalname", "name"]),
    ];
    match KeywordTable::new(groups) {
        Ok(table) => Some(table),
        Err(e) => {
            tracing::error!(error = %e, "input purpose table failed to build");
            None
        }
    }
});

pub struct InputPurposeRule;

impl Rule for InputPurposeRule {
    fn id(&self) -> &'static str { "INPUT_PURPOSE" }
    fn description(&self) -> &'static str { "Inputs collecting user data should identify their purpose" }
    fn severity(&self) -> Severity { Severity::Medium }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        if !node.is_type(control_types::INPUT) {
            return Vec::new();
        }
        let Some(token) = infer_purpose(node) else {
            return Vec::new();
        };
        if declares_purpose(node) {
            return Vec::new();
        }

        let field = node.name.as_deref().unwrap_or(&node.id);
        vec![Finding::builder(self.id(), self.severity(), node, ctx)
            .sub_type("MISSING")
            .message(format!(
                "Input '{field}' appears to collect '{token}' but declares no autocomplete purpose"
            ))
            .rationale("A declared input purpose lets browsers autofill and lets assistive tools present familiar icons or terms.")
            .suggested_fix(format!("Set the autocomplete property to \"{token}\"."))
            .criterion(WcagCriterion::IdentifyInputPurpose)
            .build()]
    }
}

/// Abbreviations too short to match as fragments; only a whole identifier counts.
const SHORT_FORMS: &[(&str, &str)] = &[("fname", "given-name"), ("lname", "family-name")];

/// Canonical autocomplete token suggested by the declared name, then the id.
pub fn infer_purpose(node: &UiNode) -> Option<&'static str> {
    let table = PURPOSES.as_ref()?;
    node.name
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(node.id.as_str()))
        .map(normalize_identifier)
        .filter(|key| !key.is_empty())
        .find_map(|key| {
            SHORT_FORMS
                .iter()
                .find(|(short, _)| *short == key)
                .map(|(_, token)| *token)
                .or_else(|| table.find(&key).copied())
        })
}

fn declares_purpose(node: &UiNode) -> bool {
    AUTOCOMPLETE_KEYS.iter().any(|key| {
        properties::first_text(node, &[*key]).is_some_and(|value| {
            let value = unquote(&value);
            !value.is_empty() && !value.eq_ignore_ascii_case("off")
        })
    })
}
