//! Vocabulary namespaces and term names used in VIVO output.
//!
//! These are fixed external prefixes; the mapper never redefines them.

/// VIVO core ontology namespace URI.
pub const VIVO: &str = "http://vivoweb.org/ontology/core#";

/// Bibliographic Ontology namespace URI.
pub const BIBO: &str = "http://purl.org/ontology/bibo/";

/// vCard (contact card) namespace URI.
pub const VCARD: &str = "http://www.w3.org/2006/vcard/ns#";

/// OBO relations / BFO namespace URI.
pub const OBO: &str = "http://purl.obolibrary.org/obo/";

/// FOAF namespace URI.
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

/// SKOS namespace URI.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

/// W3C WGS84 geo positioning namespace URI.
pub const GEO: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";

/// OAI-ORE terms namespace URI.
pub const ORE: &str = "http://www.openarchives.org/ore/terms/";

/// DCMI metadata terms namespace URI.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// XML Schema namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Base of canonical ORCID identifier URIs.
pub const ORCID_ORG: &str = "http://orcid.org/";

/// Class URIs emitted by the mapper.
pub mod classes {
    /// VIVO authorship relationship.
    pub const AUTHORSHIP: &str = "http://vivoweb.org/ontology/core#Authorship";
    /// VIVO reified date value.
    pub const DATE_TIME_VALUE: &str = "http://vivoweb.org/ontology/core#DateTimeValue";
    /// Person with a confirmed researcher identifier.
    pub const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    /// Contact card for a person known only by name.
    pub const VCARD_INDIVIDUAL: &str = "http://www.w3.org/2006/vcard/ns#Individual";
    /// Structured name.
    pub const VCARD_NAME: &str = "http://www.w3.org/2006/vcard/ns#Name";
    /// Contact card for an organization-shaped record.
    pub const VCARD_ORGANIZATION: &str = "http://www.w3.org/2006/vcard/ns#Organization";
    /// Postal address.
    pub const VCARD_ADDRESS: &str = "http://www.w3.org/2006/vcard/ns#Address";
    /// Ranked web link.
    pub const VCARD_URL: &str = "http://www.w3.org/2006/vcard/ns#URL";
    /// Email address.
    pub const VCARD_EMAIL: &str = "http://www.w3.org/2006/vcard/ns#Email";
    /// Geolocation point.
    pub const GEO_POINT: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#Point";
    /// Subject area concept.
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";

    // Work types
    /// Figure.
    pub const IMAGE: &str = "http://purl.org/ontology/bibo/Image";
    /// Media.
    pub const AUDIO_VISUAL_DOCUMENT: &str = "http://purl.org/ontology/bibo/AudioVisualDocument";
    /// Dataset.
    pub const DATASET: &str = "http://vivoweb.org/ontology/core#Dataset";
    /// Fileset.
    pub const COLLECTION: &str = "http://purl.org/ontology/bibo/Collection";
    /// Poster.
    pub const CONFERENCE_POSTER: &str = "http://vivoweb.org/ontology/core#ConferencePoster";
    /// Journal contribution.
    pub const ACADEMIC_ARTICLE: &str = "http://purl.org/ontology/bibo/AcademicArticle";
    /// Presentation.
    pub const SLIDESHOW: &str = "http://purl.org/ontology/bibo/Slideshow";
    /// Thesis.
    pub const THESIS: &str = "http://purl.org/ontology/bibo/Thesis";
    /// Software (ERO).
    pub const SOFTWARE: &str = "http://purl.obolibrary.org/obo/ERO_0000071";
    /// Generic fallback for unknown type codes.
    pub const DOCUMENT: &str = "http://purl.org/ontology/bibo/Document";

    /// OAI-ORE aggregation of a work's files.
    pub const AGGREGATION: &str = "http://www.openarchives.org/ore/terms/Aggregation";
}

/// Property URIs emitted by the mapper.
pub mod properties {
    /// rdf:type
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// rdfs:label
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    // Work description
    /// Abstract text.
    pub const ABSTRACT: &str = "http://purl.org/ontology/bibo/abstract";
    /// DOI literal.
    pub const DOI: &str = "http://purl.org/ontology/bibo/doi";
    /// Free-text keyword.
    pub const FREETEXT_KEYWORD: &str = "http://vivoweb.org/ontology/core#freetextKeyword";
    /// Subject area link.
    pub const HAS_SUBJECT_AREA: &str = "http://vivoweb.org/ontology/core#hasSubjectArea";

    // Dates
    /// Work to publication date.
    pub const PUBLISHED_DATE: &str = "http://vivoweb.org/ontology/core#publishedDate";
    /// Work to creation date.
    pub const CREATED_DATE: &str = "http://vivoweb.org/ontology/core#createdDate";
    /// Work to modification date.
    pub const MODIFIED_DATE: &str = "http://vivoweb.org/ontology/core#modifiedDate";
    /// Date value literal.
    pub const DATE_TIME: &str = "http://vivoweb.org/ontology/core#dateTime";
    /// Date precision.
    pub const DATE_TIME_PRECISION: &str = "http://vivoweb.org/ontology/core#dateTimePrecision";
    /// Day precision individual.
    pub const YEAR_MONTH_DAY_PRECISION: &str =
        "http://vivoweb.org/ontology/core#yearMonthDayPrecision";

    // Relationships
    /// Relationship to its participants.
    pub const RELATES: &str = "http://vivoweb.org/ontology/core#relates";
    /// Participant to relationship.
    pub const RELATED_BY: &str = "http://vivoweb.org/ontology/core#relatedBy";
    /// Relationship rank.
    pub const RANK: &str = "http://vivoweb.org/ontology/core#rank";
    /// Person to canonical ORCID URI.
    pub const ORCID_ID: &str = "http://vivoweb.org/ontology/core#orcidId";
    /// BFO part of.
    pub const PART_OF: &str = "http://purl.obolibrary.org/obo/BFO_0000050";
    /// BFO has part.
    pub const HAS_PART: &str = "http://purl.obolibrary.org/obo/BFO_0000051";

    // Contact card
    /// Entity to its contact card.
    pub const HAS_CONTACT_INFO: &str = "http://purl.obolibrary.org/obo/ARG_2000028";
    /// Card to name.
    pub const HAS_NAME: &str = "http://www.w3.org/2006/vcard/ns#hasName";
    /// Given name.
    pub const GIVEN_NAME: &str = "http://www.w3.org/2006/vcard/ns#givenName";
    /// Family name.
    pub const FAMILY_NAME: &str = "http://www.w3.org/2006/vcard/ns#familyName";
    /// Additional (middle) name.
    pub const ADDITIONAL_NAME: &str = "http://www.w3.org/2006/vcard/ns#additionalName";
    /// Card to address.
    pub const HAS_ADDRESS: &str = "http://www.w3.org/2006/vcard/ns#hasAddress";
    /// Street line.
    pub const STREET_ADDRESS: &str = "http://www.w3.org/2006/vcard/ns#streetAddress";
    /// City.
    pub const LOCALITY: &str = "http://www.w3.org/2006/vcard/ns#locality";
    /// Region.
    pub const REGION: &str = "http://www.w3.org/2006/vcard/ns#region";
    /// Postal code.
    pub const POSTAL_CODE: &str = "http://www.w3.org/2006/vcard/ns#postalCode";
    /// Country.
    pub const COUNTRY_NAME: &str = "http://www.w3.org/2006/vcard/ns#country-name";
    /// Card to URL entity.
    pub const HAS_URL: &str = "http://www.w3.org/2006/vcard/ns#hasURL";
    /// URL value.
    pub const URL: &str = "http://www.w3.org/2006/vcard/ns#url";
    /// Card to email entity.
    pub const HAS_EMAIL: &str = "http://www.w3.org/2006/vcard/ns#hasEmail";
    /// Email value.
    pub const EMAIL: &str = "http://www.w3.org/2006/vcard/ns#email";
    /// Card to geolocation.
    pub const HAS_GEO: &str = "http://www.w3.org/2006/vcard/ns#hasGeo";
    /// Latitude.
    pub const LAT: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#lat";
    /// Longitude.
    pub const LONG: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#long";

    // OAI-ORE aggregation
    /// Aggregation to the resource it describes.
    pub const ORE_DESCRIBES: &str = "http://www.openarchives.org/ore/terms/describes";
    /// Aggregation to a metadata document about it.
    pub const ORE_IS_DESCRIBED_BY: &str = "http://www.openarchives.org/ore/terms/isDescribedBy";
    /// Aggregation to an aggregated file.
    pub const ORE_AGGREGATES: &str = "http://www.openarchives.org/ore/terms/aggregates";
    /// File back to its aggregation.
    pub const ORE_AGGREGATED_BY: &str = "http://www.openarchives.org/ore/terms/isAggregatedBy";
    /// dcterms:created
    pub const DC_CREATED: &str = "http://purl.org/dc/terms/created";
    /// dcterms:modified
    pub const DC_MODIFIED: &str = "http://purl.org/dc/terms/modified";
    /// dcterms:title
    pub const DC_TITLE: &str = "http://purl.org/dc/terms/title";
}

/// XML Schema datatype URIs.
pub mod datatypes {
    /// xsd:integer
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// xsd:dateTime
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// xsd:decimal
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// xsd:string
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// xsd:anyURI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}
