//! The ucjeps tenant test suite
//!
//! Canonical registry of browser test cases for the UC Jepson Herbaria
//! CollectionSpace deployment: login, the post-login landing page, the
//! create-new page customizations, the cataloging record-editor
//! customizations, and a cataloging record save round-trip.
//!
//! The CSS class names here are pinned to the tenant's UI configuration;
//! when the tenant config changes, this module is the only place to touch.

use chrono::Local;
use thirtyfour::WebElement;

use crate::browser::{Locator, Session};
use crate::common::{Config, Error, Result};
use crate::suite::{
    expect_absent, expect_contains, expect_eq, expect_present, Suite, SuiteBuilder, TestCase,
};

/// Everything a test case body may touch during a run
pub struct RunEnv {
    pub session: Session,
    pub config: Config,
}

/// Build the canonical ucjeps suite
pub fn suite() -> Result<Suite<RunEnv>> {
    SuiteBuilder::new()
        .case(TestCase::new("login", &[], |env| Box::pin(login(env))))
        .case(TestCase::new("landing_page", &["login"], |env| {
            Box::pin(landing_page(env))
        }))
        .case(TestCase::new("create_new", &["login"], |env| {
            Box::pin(create_new(env))
        }))
        .case(TestCase::new(
            "cataloging_record_editor",
            &["login"],
            |env| Box::pin(cataloging_record_editor(env)),
        ))
        .case(TestCase::new("save_cataloging_record", &["login"], |env| {
            Box::pin(save_cataloging_record(env))
        }))
        .build()
}

/// Logging in to the tenant should succeed: no error banner appears.
async fn login(env: &RunEnv) -> Result<()> {
    let session = &env.session;
    session.navigate(&env.config.page_url("index.html")).await?;

    let user = session.locate(&Locator::class("csc-login-userId")).await?;
    session.type_text(&user, &env.config.username).await?;

    let password = session
        .locate(&Locator::class("csc-login-password"))
        .await?;
    session.type_text(&password, &env.config.password).await?;

    let button = session.locate(&Locator::class("csc-login-button")).await?;
    session.click(&button).await?;

    // The error banner is allowed to be absent; its presence is the failure.
    if let Some(banner) = session
        .locate_optional(&Locator::class("cs-message-error"))
        .await?
    {
        let message = match session
            .locate_optional_in(&banner, &Locator::id("message"))
            .await?
        {
            Some(el) => session.read_text(&el).await?,
            None => String::new(),
        };
        return Err(Error::Assertion(format!("login failed: '{}'", message)));
    }

    Ok(())
}

/// Login should land on the create new page.
async fn landing_page(env: &RunEnv) -> Result<()> {
    let title = env.session.title().await?;
    expect_eq(
        "landing page title",
        &title,
        "CollectionSpace - Create New Record",
    )
}

/// The acquisition and object exit procedures are removed for this tenant,
/// so neither creation button may appear on the create-new page.
async fn create_new(env: &RunEnv) -> Result<()> {
    let session = &env.session;
    session
        .navigate(&env.config.page_url("createnew.html"))
        .await?;

    for procedure in ["acquisition", "objectexit"] {
        let locator = Locator::css(format!("input[value={}]", procedure));
        let button = session.locate_optional(&locator).await?;
        expect_absent(&format!("'{}' create button", procedure), button)?;
    }

    Ok(())
}

/// Cataloging record editor customizations:
/// the Object Collection Information section is renamed to
/// Field Collection Information, the field collection date is a structured
/// date, and the production/owner/viewer contribution sections are removed.
async fn cataloging_record_editor(env: &RunEnv) -> Result<()> {
    let session = &env.session;
    session
        .navigate(&env.config.page_url("cataloging.html"))
        .await?;

    let label = session
        .locate(&Locator::class(
            "csc-collection-object-objectCollectionInformation-label",
        ))
        .await?;
    let label_text = session.read_text(&label).await?;
    expect_eq(
        "collection information section label",
        &label_text,
        "Field Collection Information",
    )?;

    let date_field = session
        .locate(&Locator::class("csc-collection-object-fieldCollectionDate"))
        .await?;
    let class_attr = session.read_attribute(&date_field, "class").await?;
    let class_attr = expect_present("fieldCollectionDate class attribute", class_attr)?;
    expect_contains(
        "fieldCollectionDate widget",
        &class_attr,
        "cs-structuredDate-input",
    )?;

    const REMOVED_SECTION_LABELS: [&str; 3] = [
        "csc-collection-object-objectProductionInformation-label",
        "csc-collection-object-objectOwnerContributionInformation-label",
        "csc-collection-object-objectViewerContributionInformation-label",
    ];

    for class_name in REMOVED_SECTION_LABELS {
        let section = session.locate_optional(&Locator::class(class_name)).await?;
        expect_absent(&format!("removed section '{}'", class_name), section)?;
    }

    Ok(())
}

/// Saving a cataloging record: the save succeeds and every field written
/// before the save reads back exactly as written, including the
/// naturalhistory taxon autocomplete and the ucjeps local extensions.
async fn save_cataloging_record(env: &RunEnv) -> Result<()> {
    let session = &env.session;
    session
        .navigate(&env.config.page_url("cataloging.html"))
        .await?;

    let taxon_value = "Ulva compressa";
    let handwritten_value = "yes";
    let count_value = "5";

    let object_number = session
        .locate(&Locator::class("csc-object-identification-object-number"))
        .await?;
    session.type_text(&object_number, &timestamp()).await?;

    fill_autocomplete(session, "csc-taxonomic-identification-taxon", taxon_value).await?;

    let handwritten = session
        .locate(&Locator::class("csc-collection-object-handwritten"))
        .await?;
    let option = session
        .locate_in(
            &handwritten,
            &Locator::css(format!("option[value={}]", handwritten_value)),
        )
        .await?;
    session.click(&option).await?;

    let count = session
        .locate(&Locator::class(
            "csc-object-identification-number-of-objects",
        ))
        .await?;
    session.type_text(&count, count_value).await?;

    let label_requested = session
        .locate(&Locator::class("csc-collection-object-labelRequested"))
        .await?;
    session.click(&label_requested).await?;

    let save = session.locate(&Locator::class("csc-save")).await?;
    session.click(&save).await?;

    let message = session
        .locate(&Locator::class("csc-messageBar-message"))
        .await?;
    let message_text = session.read_text(&message).await?;
    expect_contains("save message bar", &message_text, "success")?;

    let saved_taxon = autocomplete_value(session, "csc-taxonomic-identification-taxon").await?;
    expect_eq("saved taxon value", &saved_taxon, taxon_value)?;

    let handwritten = session
        .locate(&Locator::class("csc-collection-object-handwritten"))
        .await?;
    let saved_handwritten = session.read_attribute(&handwritten, "value").await?;
    let saved_handwritten = expect_present("saved handwritten value", saved_handwritten)?;
    expect_eq("saved handwritten value", &saved_handwritten, handwritten_value)?;

    let count = session
        .locate(&Locator::class(
            "csc-object-identification-number-of-objects",
        ))
        .await?;
    let saved_count = session.read_attribute(&count, "value").await?;
    let saved_count = expect_present("saved object count", saved_count)?;
    expect_eq("saved object count", &saved_count, count_value)?;

    let label_requested = session
        .locate(&Locator::class("csc-collection-object-labelRequested"))
        .await?;
    let checked = session.read_attribute(&label_requested, "checked").await?;
    expect_present("label requested checkbox state", checked)?;

    Ok(())
}

/// Type into an autocomplete field and pick from the popup: an existing
/// match when the matches panel has one, otherwise the first "add new"
/// authority entry. The fallback order decides which underlying record
/// gets linked, so it must not change.
async fn fill_autocomplete(session: &Session, class_name: &str, value: &str) -> Result<()> {
    let input = autocomplete_input(session, class_name).await?;
    session.type_text(&input, value).await?;

    let popup = session
        .locate(&Locator::class("cs-autocomplete-popup"))
        .await?;
    let matches_panel = session
        .locate_in(&popup, &Locator::class("csc-autocomplete-Matches"))
        .await?;

    match session
        .locate_optional_in(&matches_panel, &Locator::tag("li"))
        .await?
    {
        Some(first_match) => session.click(&first_match).await,
        None => {
            let add_to_panel = session
                .locate_in(&popup, &Locator::class("csc-autocomplete-addToPanel"))
                .await?;
            let first_entry = session
                .locate_in(&add_to_panel, &Locator::tag("li"))
                .await?;
            session.click(&first_entry).await
        }
    }
}

/// The visible input paired with an autocomplete field sits next to the
/// field's base element in the DOM.
async fn autocomplete_input(session: &Session, class_name: &str) -> Result<WebElement> {
    session
        .locate(&Locator::css(format!(
            ".{} + .cs-autocomplete-input",
            class_name
        )))
        .await
}

async fn autocomplete_value(session: &Session, class_name: &str) -> Result<String> {
    let input = autocomplete_input(session, class_name).await?;
    let value = session.read_attribute(&input, "value").await?;
    Ok(value.unwrap_or_default())
}

/// Object numbers must be unique per run; the wall clock is good enough.
fn timestamp() -> String {
    Local::now().format("%y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_builds() {
        let suite = suite().unwrap();
        assert_eq!(suite.len(), 5);
    }

    #[test]
    fn test_login_runs_first() {
        let suite = suite().unwrap();
        let first = suite.cases_in_order().next().unwrap();
        assert_eq!(first.name(), "login");
    }

    #[test]
    fn test_every_case_gated_on_login() {
        let suite = suite().unwrap();
        for case in suite.cases_in_order().skip(1) {
            assert!(
                case.prerequisites().contains(&"login"),
                "case '{}' must require login",
                case.name()
            );
        }
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        // "yy-mm-dd hh:mm:ss"
        assert_eq!(ts.len(), 17);
        assert_eq!(&ts[2..3], "-");
        assert_eq!(&ts[8..9], " ");
    }
}
