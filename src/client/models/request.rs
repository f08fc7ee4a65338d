use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ContentType {
    #[default]
    BlogPost,
    SocialMediaPost,
    AdCopy,
    ProductDescription,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContentType::BlogPost => "Blog Post",
            ContentType::SocialMediaPost => "Social Media Post",
            ContentType::AdCopy => "Ad Copy",
            ContentType::ProductDescription => "Product Description",
        };
        write!(f, "{}", s)
    }
}

const ALL_CONTENT_TYPES: [ContentType; 4] = [
    ContentType::BlogPost,
    ContentType::SocialMediaPost,
    ContentType::AdCopy,
    ContentType::ProductDescription,
];

impl ContentType {
    pub fn all() -> &'static [ContentType] {
        &ALL_CONTENT_TYPES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Tone {
    #[default]
    Friendly,
    Professional,
    Persuasive,
    Humorous,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Persuasive => "Persuasive",
            Tone::Humorous => "Humorous",
        };
        write!(f, "{}", s)
    }
}

const ALL_TONES: [Tone; 4] = [
    Tone::Friendly,
    Tone::Professional,
    Tone::Persuasive,
    Tone::Humorous,
];

impl Tone {
    pub fn all() -> &'static [Tone] {
        &ALL_TONES
    }
}

/// Parameter snapshot sent to the generation service. Built fresh from the
/// form on each submit; never mutated afterwards. All six fields travel in
/// every request body (`cta` may be empty).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub content_type: ContentType,
    pub niche: String,
    pub tone: Tone,
    pub word_count: String,
    pub keywords: String,
    pub cta: String,
}
