use gazette_core::RawArticle;

/// One canned article as a provider would serve it.
pub struct Fixture {
    pub title: &'static str,
    pub description: &'static str,
    pub source: &'static str,
    pub url: &'static str,
    pub published_at: &'static str,
    pub category: &'static str,
    pub language: &'static str,
}

impl Fixture {
    pub fn to_raw(&self) -> RawArticle {
        RawArticle {
            title: Some(self.title.to_string()),
            description: Some(self.description.to_string()),
            content: Some(format!("{} {}", self.title, self.description)),
            url: Some(self.url.to_string()),
            image_url: None,
            source_name: Some(self.source.to_string()),
            published_at: Some(self.published_at.to_string()),
            language: Some(self.language.to_string()),
        }
    }
}

// The first entry of each set shares its identity with the other set so that
// merging the two exercises deduplication.
pub static PRIMARY: &[Fixture] = &[
    Fixture {
        title: "Solar output hits record high across Europe",
        description: "Grid operators report a record week for solar generation.",
        source: "Energy Wire",
        url: "https://energywire.example/solar-record",
        published_at: "2025-07-02T09:30:00Z",
        category: "science",
        language: "en",
    },
    Fixture {
        title: "Central bank holds rates steady",
        description: "Policy makers signal patience as inflation cools.",
        source: "Market Daily",
        url: "https://marketdaily.example/rates-hold",
        published_at: "2025-06-25T14:00:00Z",
        category: "business",
        language: "en",
    },
    Fixture {
        title: "Storm causes widespread outages on the coast",
        description: "Thousands without power after the storm made landfall.",
        source: "Coastal Times",
        url: "https://coastaltimes.example/storm-outages",
        published_at: "2025-06-21T06:15:00Z",
        category: "general",
        language: "en",
    },
    Fixture {
        title: "Open source project celebrates ten years",
        description: "Maintainers celebrate a decade of community releases.",
        source: "Dev Journal",
        url: "https://devjournal.example/ten-years",
        published_at: "2025-06-30T18:45:00Z",
        category: "technology",
        language: "en",
    },
];

pub static SECONDARY: &[Fixture] = &[
    Fixture {
        title: "Solar output hits record high across Europe",
        description: "Syndicated copy of the solar story.",
        source: "Energy Wire",
        url: "https://energywire.example/solar-record",
        published_at: "2025-07-02T09:30:00Z",
        category: "science",
        language: "en",
    },
    Fixture {
        title: "Chip makers report loss as demand declines",
        description: "Quarterly results show a decline in consumer demand.",
        source: "Tech Ledger",
        url: "https://techledger.example/chip-loss",
        published_at: "2025-05-14T11:00:00Z",
        category: "technology",
        language: "en",
    },
    Fixture {
        title: "Local team wins championship final",
        description: "Fans celebrate the first title in twenty years.",
        source: "Sports Desk",
        url: "https://sportsdesk.example/championship",
        published_at: "2025-06-28T21:10:00Z",
        category: "sports",
        language: "en",
    },
    Fixture {
        title: "Museum reopens after renovation",
        description: "",
        source: "City Notes",
        url: "https://citynotes.example/museum",
        published_at: "",
        category: "general",
        language: "en",
    },
    Fixture {
        title: "Le marché de l'énergie solaire bat un record",
        description: "Les opérateurs saluent une semaine record.",
        source: "Le Courrier",
        url: "https://lecourrier.example/solaire",
        published_at: "2025-07-01T08:00:00Z",
        category: "science",
        language: "fr",
    },
    Fixture {
        title: "Nouvelle ligne de tramway inaugurée",
        description: "La ville célèbre sa nouvelle ligne.",
        source: "Le Courrier",
        url: "https://lecourrier.example/tramway",
        published_at: "2025-04-10T10:00:00Z",
        category: "general",
        language: "fr",
    },
];
