//! Shared RDF graph reading for the Turtle and RDF/XML loaders.
//!
//! Triples from either parser are indexed by subject, then classes and
//! properties are read off the graph. Both OWL style (`rdfs:domain` /
//! `rdfs:range`, with `owl:unionOf` collections for multiple classes) and
//! schema.org style (`schema:domainIncludes` / `schema:rangeIncludes`)
//! declarations are understood. Anything else in the graph is ignored.

use std::collections::{BTreeMap, HashMap, HashSet};

use sophia_api::source::TripleSource;
use sophia_api::term::Term;
use sophia_api::triple::Triple;
use tracing::debug;

use crate::model::iris::*;
use crate::model::{LangText, OntologyClass, OntologyDocument, OntologyProperty};

/// An RDF term reduced to the parts the loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Node {
    Iri(String),
    Blank(String),
    Literal { value: String, lang: String },
}

impl Node {
    fn from_term<T: Term>(term: T) -> Self {
        if let Some(iri) = term.iri() {
            Node::Iri(iri.as_str().to_string())
        } else if let Some(bnode) = term.bnode_id() {
            Node::Blank(bnode.as_str().to_string())
        } else {
            Node::Literal {
                value: term
                    .lexical_form()
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
                lang: term
                    .language_tag()
                    .map(|tag| tag.as_str().to_string())
                    .unwrap_or_default(),
            }
        }
    }

    fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

/// All statements about one subject, predicates in document order.
#[derive(Debug, Default)]
struct Subject {
    statements: Vec<(String, Node)>,
}

impl Subject {
    fn objects<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.statements
            .iter()
            .filter(move |(p, _)| p == predicate)
            .map(|(_, o)| o)
    }

    fn schema_objects<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.statements
            .iter()
            .filter(move |(p, _)| is_schema_term(p, local))
            .map(|(_, o)| o)
    }

    fn texts(&self, predicate: &str) -> Vec<LangText> {
        self.objects(predicate)
            .filter_map(|o| match o {
                Node::Literal { value, lang } => Some(LangText::new(lang.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    fn types(&self) -> HashSet<&str> {
        self.objects(RDF_TYPE).filter_map(Node::as_iri).collect()
    }
}

/// The parsed graph, indexed by subject.
struct Graph {
    subjects: BTreeMap<Node, Subject>,
}

impl Graph {
    fn subject(&self, node: &Node) -> Option<&Subject> {
        self.subjects.get(node)
    }

    /// Walks an RDF collection from `head`, returning its IRI members.
    fn collection(&self, head: &Node) -> Vec<String> {
        let mut members = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = head.clone();
        while cursor != Node::Iri(RDF_NIL.to_string()) && seen.insert(cursor.clone()) {
            let Some(cell) = self.subject(&cursor) else {
                break;
            };
            if let Some(iri) = cell.objects(RDF_FIRST).find_map(Node::as_iri) {
                members.push(iri.to_string());
            }
            match cell.objects(RDF_REST).next() {
                Some(rest) => cursor = rest.clone(),
                None => break,
            }
        }
        members
    }

    /// Expands a domain/range object into class IRIs: either the IRI itself
    /// or the members of an anonymous class's `owl:unionOf` collection.
    fn class_set(&self, node: &Node) -> Vec<String> {
        match node {
            Node::Iri(iri) => vec![iri.clone()],
            Node::Blank(_) => self
                .subject(node)
                .and_then(|anon| anon.objects(OWL_UNION_OF).next())
                .map(|head| self.collection(head))
                .unwrap_or_default(),
            Node::Literal { .. } => Vec::new(),
        }
    }

    fn class_sets<'a>(&self, objects: impl Iterator<Item = &'a Node>) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for object in objects {
            for iri in self.class_set(object) {
                if !out.contains(&iri) {
                    out.push(iri);
                }
            }
        }
        out
    }
}

// Orders blank nodes and literals after IRIs so BTreeMap keys are total.
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        fn key(n: &Node) -> (u8, &str, &str) {
            match n {
                Node::Iri(s) => (0, s, ""),
                Node::Blank(s) => (1, s, ""),
                Node::Literal { value, lang } => (2, value, lang),
            }
        }
        key(self).cmp(&key(other))
    }
}


/// Drains `source` into an [`OntologyDocument`].
///
/// Classes are subjects typed `owl:Class` or `rdfs:Class`; properties are
/// subjects typed `owl:ObjectProperty`, `owl:DatatypeProperty` or
/// `rdf:Property`. Both lists come back sorted by id.
///
/// # Errors
///
/// Returns the parser's message if the source fails mid-stream.
pub(crate) fn read_document<S: TripleSource>(mut source: S) -> Result<OntologyDocument, String> {
    let mut triples: Vec<(Node, String, Node)> = Vec::new();
    source
        .for_each_triple(|t| {
            if let Node::Iri(predicate) = Node::from_term(t.p()) {
                triples.push((Node::from_term(t.s()), predicate, Node::from_term(t.o())));
            }
        })
        .map_err(|e| e.to_string())?;
    debug!("parsed {} triples", triples.len());

    let mut subjects: BTreeMap<Node, Subject> = BTreeMap::new();
    for (s, p, o) in triples {
        subjects.entry(s).or_default().statements.push((p, o));
    }
    let graph = Graph { subjects };

    let mut classes: HashMap<String, OntologyClass> = HashMap::new();
    let mut properties: HashMap<String, OntologyProperty> = HashMap::new();
    let mut base_iri = None;

    for (node, subject) in &graph.subjects {
        let Node::Iri(id) = node else {
            continue;
        };
        let types = subject.types();

        if types.contains(format!("{OWL}Ontology").as_str()) && base_iri.is_none() {
            base_iri = Some(id.clone());
        }

        if types.contains(OWL_CLASS) || types.contains(RDFS_CLASS) {
            classes.insert(id.clone(), build_class(id, subject));
        }

        if [OWL_OBJECT_PROPERTY, OWL_DATATYPE_PROPERTY, RDF_PROPERTY]
            .iter()
            .any(|t| types.contains(*t))
        {
            properties.insert(id.clone(), build_property(id, subject, &graph));
        }
    }

    let mut classes: Vec<OntologyClass> = classes.into_values().collect();
    classes.sort_by(|a, b| a.id.cmp(&b.id));
    let mut properties: Vec<OntologyProperty> = properties.into_values().collect();
    properties.sort_by(|a, b| a.id.cmp(&b.id));
    debug!(
        "loaded {} classes and {} properties",
        classes.len(),
        properties.len()
    );

    Ok(OntologyDocument {
        base_iri,
        classes,
        properties,
    })
}

fn build_class(id: &str, subject: &Subject) -> OntologyClass {
    OntologyClass {
        id: id.to_string(),
        labels: subject.texts(RDFS_LABEL),
        comments: subject.texts(RDFS_COMMENT),
        subclass_of: subject
            .objects(RDFS_SUBCLASS_OF)
            .filter_map(Node::as_iri)
            .map(str::to_string)
            .collect(),
        is_defined_by: subject
            .objects(RDFS_IS_DEFINED_BY)
            .find_map(Node::as_iri)
            .map(str::to_string),
    }
}

fn build_property(id: &str, subject: &Subject, graph: &Graph) -> OntologyProperty {
    let domain = graph.class_sets(
        subject
            .objects(RDFS_DOMAIN)
            .chain(subject.schema_objects(SCHEMA_DOMAIN_INCLUDES)),
    );
    let range = graph.class_sets(
        subject
            .objects(RDFS_RANGE)
            .chain(subject.schema_objects(SCHEMA_RANGE_INCLUDES)),
    );
    OntologyProperty {
        id: id.to_string(),
        labels: subject.texts(RDFS_LABEL),
        comments: subject.texts(RDFS_COMMENT),
        domain,
        range,
        superseded_by: subject
            .schema_objects(SCHEMA_SUPERSEDED_BY)
            .filter_map(Node::as_iri)
            .map(str::to_string)
            .collect(),
        is_defined_by: subject
            .objects(RDFS_IS_DEFINED_BY)
            .find_map(Node::as_iri)
            .map(str::to_string),
    }
}

