//! # Countries
//!
//! Static lookup table behind the country and city selects of the form.
//!
//! Order matters: countries and cities are offered in table order.

pub struct Country {
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

pub const COUNTRIES: &[Country] = &[
    Country {
        name: "Israel",
        cities: &[
            "Jerusalem",
            "Tel Aviv",
            "Haifa",
            "Beer Sheva",
            "Rishon LeZion",
            "Petah Tikva",
            "Ashdod",
            "Netanya",
            "Eilat",
        ],
    },
    Country {
        name: "United States",
        cities: &[
            "New York",
            "Los Angeles",
            "Chicago",
            "Houston",
            "Boston",
        ],
    },
    Country {
        name: "United Kingdom",
        cities: &["London", "Manchester", "Birmingham", "Liverpool"],
    },
    Country {
        name: "France",
        cities: &["Paris", "Lyon", "Marseille", "Nice"],
    },
    Country {
        name: "Germany",
        cities: &["Berlin", "Munich", "Hamburg", "Frankfurt"],
    },
];

pub fn country_names() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().map(|country| country.name)
}

/// Cities offered for `country`, empty when the country is unknown.
pub fn cities_of(country: &str) -> &'static [&'static str] {
    COUNTRIES
        .iter()
        .find(|item| item.name == country)
        .map(|item| item.cities)
        .unwrap_or(&[])
}

pub fn has_city(country: &str, city: &str) -> bool {
    cities_of(country).contains(&city)
}
