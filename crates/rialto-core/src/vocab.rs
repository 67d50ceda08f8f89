//! Class IRIs and attribute names shared by every stage.
//!
//! Attribute names are the variable names bound by the graph queries that
//! produce attribute bags, so they are short (`title`, `firstname`) rather
//! than full predicate IRIs.

/// FOAF classes.
pub mod foaf {
    pub const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    pub const ORGANIZATION: &str = "http://xmlns.com/foaf/0.1/Organization";
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
}

/// VIVO core classes used for the organizational hierarchy.
pub mod vivo {
    pub const NS: &str = "http://vivoweb.org/ontology/core#";

    pub const UNIVERSITY: &str = "http://vivoweb.org/ontology/core#University";
    pub const SCHOOL: &str = "http://vivoweb.org/ontology/core#School";
    pub const DEPARTMENT: &str = "http://vivoweb.org/ontology/core#Department";
    pub const INSTITUTE: &str = "http://vivoweb.org/ontology/core#Institute";
    pub const DIVISION: &str = "http://vivoweb.org/ontology/core#Division";
    pub const CENTER: &str = "http://vivoweb.org/ontology/core#Center";

    pub const POSITION: &str = "http://vivoweb.org/ontology/core#Position";
    pub const RELATED_BY: &str = "http://vivoweb.org/ontology/core#relatedBy";
    pub const RELATES: &str = "http://vivoweb.org/ontology/core#relates";

    pub const STUDENT: &str = "http://vivoweb.org/ontology/core#Student";
    pub const FACULTY_MEMBER: &str = "http://vivoweb.org/ontology/core#FacultyMember";
}

/// BIBO document classes.
pub mod bibo {
    pub const DOCUMENT: &str = "http://purl.org/ontology/bibo/Document";
    pub const ARTICLE: &str = "http://purl.org/ontology/bibo/Article";
    pub const ACADEMIC_ARTICLE: &str = "http://purl.org/ontology/bibo/AcademicArticle";
    pub const BOOK: &str = "http://purl.org/ontology/bibo/Book";
    pub const BOOK_SECTION: &str = "http://purl.org/ontology/bibo/BookSection";
    pub const CHAPTER: &str = "http://purl.org/ontology/bibo/Chapter";
    pub const THESIS: &str = "http://purl.org/ontology/bibo/Thesis";
    pub const REPORT: &str = "http://purl.org/ontology/bibo/Report";
    pub const PROCEEDINGS: &str = "http://purl.org/ontology/bibo/Proceedings";
    pub const PATENT: &str = "http://purl.org/ontology/bibo/Patent";
    pub const MANUSCRIPT: &str = "http://purl.org/ontology/bibo/Manuscript";
    pub const WEBPAGE: &str = "http://purl.org/ontology/bibo/Webpage";
    pub const COLLECTION: &str = "http://purl.org/ontology/bibo/Collection";
}

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const DCTERMS_TITLE: &str = "http://purl.org/dc/terms/title";
pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
pub const DBO_COUNTRY: &str = "http://dbpedia.org/ontology/country";
pub const GEONAMES_NS: &str = "http://sws.geonames.org/";

/// Classes that route a resource to the Person variant.
pub const PERSON_CLASSES: &[&str] = &[foaf::PERSON];

/// Classes that route a resource to the Organization variant.
pub const ORGANIZATION_CLASSES: &[&str] = &[
    foaf::ORGANIZATION,
    vivo::UNIVERSITY,
    vivo::SCHOOL,
    vivo::DEPARTMENT,
    vivo::INSTITUTE,
    vivo::DIVISION,
    vivo::CENTER,
];

/// Organization subclasses that may stand in for an explicit `subtype`.
pub const ORGANIZATION_SUBTYPES: &[&str] = &[
    vivo::UNIVERSITY,
    vivo::SCHOOL,
    vivo::DEPARTMENT,
    vivo::INSTITUTE,
    vivo::DIVISION,
    vivo::CENTER,
];

/// `bibo:Document` and the subclasses the aggregator ingests.
pub const PUBLICATION_CLASSES: &[&str] = &[
    bibo::DOCUMENT,
    bibo::ARTICLE,
    bibo::ACADEMIC_ARTICLE,
    bibo::BOOK,
    bibo::BOOK_SECTION,
    bibo::CHAPTER,
    bibo::THESIS,
    bibo::REPORT,
    bibo::PROCEEDINGS,
    bibo::PATENT,
    bibo::MANUSCRIPT,
    bibo::WEBPAGE,
    bibo::COLLECTION,
];

/// Attribute names as bound by the repository queries.
pub mod attr {
    pub const ID: &str = "id";
    pub const TYPE: &str = "type";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const NAME: &str = "name";
    pub const SUBTYPE: &str = "subtype";
    pub const FIRSTNAME: &str = "firstname";
    pub const LASTNAME: &str = "lastname";

    pub const CREATED: &str = "created";
    pub const IDENTIFIER: &str = "identifier";
    pub const DOI: &str = "doi";
    pub const ABSTRACT: &str = "abstract";
    pub const PUBLISHER: &str = "publisher";
    pub const DESCRIPTION: &str = "description";
    pub const CITES: &str = "cites";
    pub const LINK: &str = "link";
    pub const FUNDED_BY: &str = "fundedBy";
    pub const SPONSOR: &str = "sponsor";
    pub const HAS_INSTRUMENT: &str = "hasInstrument";
    pub const SAME_AS: &str = "sameAs";
    pub const JOURNAL_ISSUE: &str = "journalIssue";
    pub const SUBJECT: &str = "subject";
    pub const ALTERNATIVE_TITLE: &str = "alternativeTitle";

    pub const AUTHOR: &str = "author";
    pub const CONCEPT: &str = "concept";
    pub const GRANT: &str = "grant";
}

/// Returns true when any of `types` is one of `classes`.
pub fn intersects<S: AsRef<str>>(types: &[S], classes: &[&str]) -> bool {
    types.iter().any(|t| classes.contains(&t.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        assert!(intersects(&[bibo::ACADEMIC_ARTICLE], PUBLICATION_CLASSES));
        assert!(!intersects(&[foaf::PERSON], PUBLICATION_CLASSES));
        assert!(!intersects::<&str>(&[], PERSON_CLASSES));
    }
}
