//! Shared fixtures: a small schema.org-shaped vocabulary, built in code and
//! as Turtle.

#![allow(dead_code)]

use owlgen_ontology::{LangText, OntologyClass, OntologyDocument, OntologyProperty};

pub const SCHEMA: &str = "https://schema.org/";

pub fn iri(local: &str) -> String {
    format!("{SCHEMA}{local}")
}

fn class(local: &str, parents: &[&str]) -> OntologyClass {
    let mut c = OntologyClass::new(iri(local));
    c.labels = vec![LangText::new("en", local)];
    c.subclass_of = parents.iter().map(|p| iri(p)).collect();
    c
}

fn property(local: &str, domain: &[&str], range: &[&str]) -> OntologyProperty {
    let mut p = OntologyProperty::new(iri(local));
    p.labels = vec![LangText::new("en", local)];
    p.domain = domain.iter().map(|d| iri(d)).collect();
    p.range = range.iter().map(|r| iri(r)).collect();
    p
}

/// The fixture vocabulary built in code.
pub fn document() -> OntologyDocument {
    let mut map = property("map", &["Place"], &["URL"]);
    map.superseded_by = vec![iri("hasMap")];

    OntologyDocument {
        base_iri: Some(SCHEMA.to_string()),
        classes: vec![
            class("3DModel", &["CreativeWork"]),
            class("CreativeWork", &["Thing"]),
            class("LocalBusiness", &["Organization", "Place"]),
            class("Organization", &["Thing"]),
            class("Person", &["Thing"]),
            class("Place", &["Thing"]),
            class("Role", &["Thing"]),
            class("Text", &[]),
            class("Thing", &[]),
            class("URL", &["Text"]),
        ],
        properties: vec![
            property("author", &["CreativeWork"], &["Text", "Person"]),
            property("creator", &["CreativeWork"], &["Person", "Organization"]),
            property("hasMap", &["Place"], &["URL"]),
            property("location", &["Organization"], &["Place", "Text"]),
            map,
            property("member", &["Organization"], &["Role", "Person"]),
            property("name", &["Thing"], &["Text"]),
            property("url", &["Thing"], &["URL"]),
        ],
    }
}

/// The same vocabulary in schema.org's Turtle style.
pub const TURTLE: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix schema: <https://schema.org/> .

schema:3DModel a rdfs:Class ; rdfs:label "3DModel"@en ; rdfs:subClassOf schema:CreativeWork .
schema:CreativeWork a rdfs:Class ; rdfs:label "CreativeWork"@en ; rdfs:subClassOf schema:Thing .
schema:LocalBusiness a rdfs:Class ;
  rdfs:label "LocalBusiness"@en ;
  rdfs:comment "A particular physical business or branch of an organization."@en ;
  rdfs:subClassOf schema:Organization , schema:Place .
schema:Organization a rdfs:Class ; rdfs:label "Organization"@en ; rdfs:subClassOf schema:Thing .
schema:Person a rdfs:Class ; rdfs:label "Person"@en ; rdfs:subClassOf schema:Thing .
schema:Place a rdfs:Class ; rdfs:label "Place"@en ; rdfs:subClassOf schema:Thing .
schema:Role a rdfs:Class ; rdfs:label "Role"@en ; rdfs:subClassOf schema:Thing .
schema:Text a rdfs:Class ; rdfs:label "Text"@en .
schema:Thing a rdfs:Class ;
  rdfs:label "Thing"@en ;
  rdfs:comment "The most generic type of item."@en .
schema:URL a rdfs:Class ; rdfs:label "URL"@en ; rdfs:subClassOf schema:Text .

schema:author a rdf:Property ; rdfs:label "author"@en ;
  schema:domainIncludes schema:CreativeWork ;
  schema:rangeIncludes schema:Text , schema:Person .
schema:creator a rdf:Property ; rdfs:label "creator"@en ;
  rdfs:comment "The creator of this item."@en ;
  schema:domainIncludes schema:CreativeWork ;
  schema:rangeIncludes schema:Person , schema:Organization .
schema:hasMap a rdf:Property ; rdfs:label "hasMap"@en ;
  schema:domainIncludes schema:Place ;
  schema:rangeIncludes schema:URL .
schema:location a rdf:Property ; rdfs:label "location"@en ;
  schema:domainIncludes schema:Organization ;
  schema:rangeIncludes schema:Place , schema:Text .
schema:map a rdf:Property ; rdfs:label "map"@en ;
  schema:domainIncludes schema:Place ;
  schema:rangeIncludes schema:URL ;
  schema:supersededBy schema:hasMap .
schema:member a rdf:Property ; rdfs:label "member"@en ;
  schema:domainIncludes schema:Organization ;
  schema:rangeIncludes schema:Role , schema:Person .
schema:name a rdf:Property ; rdfs:label "name"@en ;
  schema:domainIncludes schema:Thing ;
  schema:rangeIncludes schema:Text .
schema:url a rdf:Property ; rdfs:label "url"@en ;
  rdfs:comment "URL of the item."@en ;
  schema:domainIncludes schema:Thing ;
  schema:rangeIncludes schema:URL .
"#;
