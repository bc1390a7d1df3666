//! Built-in book catalog used when no catalog file is given.

use super::catalog_types::{Catalog, Category, Suggestion};

const CATEGORIES: &[(&str, &str)] = &[
    ("sci-fi", "Science Fiction"),
    ("fantasy", "Fantasy"),
    ("classics", "Classics"),
    ("mystery", "Mystery"),
];

const BOOKS: &[(u64, &str, &str)] = &[
    (1, "Dune", "sci-fi"),
    (2, "Dune Messiah", "sci-fi"),
    (3, "Children of Dune", "sci-fi"),
    (4, "Foundation", "sci-fi"),
    (5, "Foundation and Empire", "sci-fi"),
    (6, "The Left Hand of Darkness", "sci-fi"),
    (7, "Hyperion", "sci-fi"),
    (8, "Neuromancer", "sci-fi"),
    (9, "The Hobbit", "fantasy"),
    (10, "The Fellowship of the Ring", "fantasy"),
    (11, "The Two Towers", "fantasy"),
    (12, "The Return of the King", "fantasy"),
    (13, "A Wizard of Earthsea", "fantasy"),
    (14, "The Name of the Wind", "fantasy"),
    (15, "Pride and Prejudice", "classics"),
    (16, "Emma", "classics"),
    (17, "Moby-Dick", "classics"),
    (18, "The Count of Monte Cristo", "classics"),
    (19, "Wuthering Heights", "classics"),
    (20, "The Hound of the Baskervilles", "mystery"),
    (21, "The Murder of Roger Ackroyd", "mystery"),
    (22, "And Then There Were None", "mystery"),
    (23, "The Big Sleep", "mystery"),
];

pub fn sample_catalog() -> Catalog {
    let categories = CATEGORIES
        .iter()
        .map(|(id, name)| Category::new(*id, name))
        .collect();
    let suggestions = BOOKS
        .iter()
        .map(|(id, title, category)| Suggestion::new(*id, title, *category))
        .collect();

    Catalog::new(suggestions, categories)
}
