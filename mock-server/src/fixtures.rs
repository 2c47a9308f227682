//! In-memory catalogue served by the mock.

use std::collections::BTreeMap;

use crate::{Book, Person};

fn person(name: &str, birth_year: Option<i32>, death_year: Option<i32>) -> Person {
    Person {
        name: name.to_string(),
        birth_year,
        death_year,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn formats(base_url: &str, id: u64, keys: &[&str]) -> BTreeMap<String, String> {
    keys.iter()
        .map(|key| {
            let url = match *key {
                "image/jpeg" => format!("{base_url}/covers/{id}.jpg"),
                k if k.starts_with("text/plain") => format!("{base_url}/texts/{id}.txt"),
                "text/html" => format!("{base_url}/html/{id}.html"),
                _ => format!("{base_url}/files/{id}"),
            };
            (key.to_string(), url)
        })
        .collect()
}

/// Books in popularity order (highest download count first).
pub fn books(base_url: &str) -> Vec<Book> {
    vec![
        Book {
            id: 84,
            title: "Frankenstein; Or, The Modern Prometheus".to_string(),
            authors: vec![person("Shelley, Mary Wollstonecraft", Some(1797), Some(1851))],
            translators: Vec::new(),
            subjects: strings(&["Frankenstein's monster (Fictitious character) -- Fiction", "Science fiction"]),
            bookshelves: strings(&["Gothic Fiction", "Science Fiction by Women"]),
            languages: strings(&["en"]),
            copyright: Some(false),
            media_type: "Text".to_string(),
            formats: formats(
                base_url,
                84,
                &["text/plain; charset=us-ascii", "image/jpeg", "text/html"],
            ),
            download_count: 60_412,
        },
        Book {
            id: 1342,
            title: "Pride and Prejudice".to_string(),
            authors: vec![person("Austen, Jane", Some(1775), Some(1817))],
            translators: Vec::new(),
            subjects: strings(&["Courtship -- Fiction", "England -- Fiction"]),
            bookshelves: strings(&["Best Books Ever Listings", "Harvard Classics"]),
            languages: strings(&["en"]),
            copyright: Some(false),
            media_type: "Text".to_string(),
            formats: formats(
                base_url,
                1342,
                &["text/plain", "text/plain; charset=us-ascii", "image/jpeg"],
            ),
            download_count: 51_233,
        },
        Book {
            id: 2680,
            title: "Meditations".to_string(),
            authors: vec![person("Marcus Aurelius, Emperor of Rome", Some(121), Some(180))],
            translators: vec![person("Long, George", Some(1800), Some(1879))],
            subjects: strings(&["Ethics", "Stoics"]),
            bookshelves: strings(&["Philosophy"]),
            languages: strings(&["en"]),
            copyright: Some(false),
            media_type: "Text".to_string(),
            formats: formats(base_url, 2680, &["text/plain"]),
            download_count: 20_877,
        },
        Book {
            id: 2000,
            title: "Don Quijote".to_string(),
            authors: vec![person("Cervantes Saavedra, Miguel de", Some(1547), Some(1616))],
            translators: Vec::new(),
            subjects: strings(&["Knights and knighthood -- Spain -- Fiction"]),
            bookshelves: strings(&["Best Books Ever Listings"]),
            languages: strings(&["es"]),
            copyright: Some(false),
            media_type: "Text".to_string(),
            formats: formats(base_url, 2000, &["text/html", "application/epub+zip"]),
            download_count: 12_054,
        },
        Book {
            id: 17989,
            title: "Le comte de Monte-Cristo, Tome I".to_string(),
            authors: vec![person("Dumas, Alexandre", Some(1802), Some(1870))],
            translators: Vec::new(),
            subjects: strings(&["Adventure stories", "Revenge -- Fiction"]),
            bookshelves: strings(&["FR Littérature"]),
            languages: strings(&["fr"]),
            copyright: None,
            media_type: "Text".to_string(),
            formats: formats(base_url, 17989, &["text/plain", "image/jpeg"]),
            download_count: 8_190,
        },
        Book {
            id: 70000,
            title: "Essays on the Sea".to_string(),
            authors: vec![person("Marlow, Ruth", Some(1950), None)],
            translators: Vec::new(),
            subjects: strings(&["Ocean -- Essays"]),
            bookshelves: Vec::new(),
            languages: strings(&["en"]),
            copyright: Some(true),
            media_type: "Text".to_string(),
            formats: formats(base_url, 70000, &["text/html", "image/jpeg"]),
            download_count: 11,
        },
    ]
}

/// Plain-text bodies, keyed by book id.
pub fn text(id: u64) -> Option<&'static str> {
    match id {
        84 => Some("You will rejoice to hear that no disaster has accompanied the commencement of an enterprise."),
        1342 => Some("It is a truth universally acknowledged, that a single man in possession of a good fortune, must be in want of a wife."),
        2680 => Some("From my grandfather Verus I learned good morals and the government of my temper."),
        17989 => Some("Le 24 février 1815, la vigie de Notre-Dame de la Garde signala le trois-mâts le Pharaon."),
        _ => None,
    }
}
