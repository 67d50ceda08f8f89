//! Enrichment step of an ingestion pass

use crate::person::Person;
use crate::repository::{ClassificationResult, ClassificationSource};
use tracing::debug;

/// Run the three classification queries for `person` and replace its buckets.
///
/// Any query failure is returned before a bucket is touched, so a person is
/// either fully enriched or left as built.
pub async fn enrich_person(
    person: &mut Person,
    source: &dyn ClassificationSource,
) -> ClassificationResult<()> {
    let subject = person.subject().to_string();

    let organizations = source.position_organizations(&subject).await?;
    let countries = source.countries(&subject).await?;
    let subtypes = source.person_subtypes(&subject).await?;

    person.set_position_organization_info(&organizations);
    person.set_countries_info(&countries);
    person.set_person_subtypes_info(&subtypes);

    debug!(
        subject = %subject,
        departments = person.department_orgs().len(),
        schools = person.school_orgs().len(),
        institutions = person.institution_orgs().len(),
        institutes = person.institute_orgs().len(),
        countries = person.countries().len(),
        subtypes = person.subtypes().len(),
        "Enriched person"
    );

    Ok(())
}
