//! Demonstrates loading an ontology file and summarizing it.
//!
//! Run with: `cargo run --example dump_ontology -p owlgen-ontology -- schemaorg.ttl`

use owlgen_ontology::OntologyDocument;

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dump_ontology <file.ttl|file.json>");
        std::process::exit(2);
    };

    let doc = match OntologyDocument::load(path.as_ref()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("Ontology {}", doc.base_iri.as_deref().unwrap_or("(no base IRI)"));
    println!("  Classes:      {}", doc.class_count());
    println!("  Properties:   {}", doc.property_count());
    println!();

    for class in &doc.classes {
        let props = doc.properties_with_domain(&class.id).count();
        println!(
            "  {:50} {:>2} parents, {:>3} properties",
            class.id,
            class.subclass_of.len(),
            props,
        );
    }

    println!();

    // Show the JSON form (first 200 chars).
    let json = doc.to_json().unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON output ({} bytes):", json.len());
    let preview_end = json.char_indices().nth(200).map_or(json.len(), |(i, _)| i);
    println!("{}...", &json[..preview_end]);
}
