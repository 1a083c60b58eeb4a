//! Part-of-speech tagging behind an injectable trait
//!
//! Keyword extraction only needs `tag(text) -> [(lemma, pos, surface_len)]`.
//! [`LexiconTagger`] provides that for English with closed-class word lists,
//! a technology gazetteer, a verb lexicon and suffix rules. It is built once
//! and only read afterwards.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Auxiliary,
    Adverb,
    Adposition,
    Conjunction,
    Determiner,
    Pronoun,
    Particle,
    Numeral,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Length of the token as it appeared in the text, in characters
    pub surface_len: usize,
}

/// Tagging capability consumed by the keyword extractor.
pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        (**self).tag(text)
    }
}

pub struct LexiconTagger {
    closed_class: HashMap<&'static str, PartOfSpeech>,
    adjectives: HashSet<&'static str>,
    proper_nouns: HashSet<String>,
    verbs: HashSet<&'static str>,
    irregular_verbs: HashMap<&'static str, &'static str>,
    irregular_plurals: HashMap<&'static str, &'static str>,
    invariant_nouns: HashSet<&'static str>,
    ly_nouns: HashSet<&'static str>,
    ed_nouns: HashSet<&'static str>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::with_custom_proper_nouns(Vec::new())
    }

    /// Create a tagger whose gazetteer also contains `extra` (matched lowercase)
    pub fn with_custom_proper_nouns(extra: Vec<String>) -> Self {
        let mut proper_nouns: HashSet<String> =
            Self::default_proper_nouns().iter().map(|s| s.to_string()).collect();
        proper_nouns.extend(
            extra
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );

        Self {
            closed_class: Self::closed_class_lexicon(),
            adjectives: Self::default_adjectives().into_iter().collect(),
            proper_nouns,
            verbs: Self::default_verbs().into_iter().collect(),
            irregular_verbs: Self::irregular_verb_forms().into_iter().collect(),
            irregular_plurals: Self::irregular_plural_forms().into_iter().collect(),
            invariant_nouns: [
                "news", "series", "species", "data", "status", "analysis", "business", "process",
                "access", "address", "success", "class", "glass", "gas", "bus", "campus", "canvas",
                "alias", "bias", "thesis", "basis", "chaos", "kudos", "lens", "ethos",
            ]
            .into_iter()
            .collect(),
            ly_nouns: [
                "family", "supply", "assembly", "reply", "ally", "rally", "anomaly", "italy",
                "butterfly", "monopoly", "jelly", "belly", "bully", "lily", "fly", "july",
            ]
            .into_iter()
            .collect(),
            ed_nouns: [
                "speed", "breed", "greed", "creed", "steed", "tweed", "hundred", "kindred",
                "seabed", "hotbed", "airspeed",
            ]
            .into_iter()
            .collect(),
        }
    }

    pub fn proper_noun_count(&self) -> usize {
        self.proper_nouns.len()
    }

    /// Tag a single lowercase word
    fn tag_word(&self, word: &str) -> (PartOfSpeech, String) {
        if let Some(pos) = self.closed_class.get(word) {
            return (*pos, word.to_string());
        }

        if word.chars().all(|c| c.is_numeric()) {
            return (PartOfSpeech::Numeral, word.to_string());
        }

        if self.adjectives.contains(word) {
            return (PartOfSpeech::Adjective, word.to_string());
        }

        if self.proper_nouns.contains(word) {
            return (PartOfSpeech::ProperNoun, word.to_string());
        }

        if let Some(base) = self.verb_lemma(word) {
            return (PartOfSpeech::Verb, base);
        }

        let char_count = word.chars().count();

        // unknown past tense and participles
        if char_count > 4 && word.ends_with("ed") && !self.ed_nouns.contains(word) {
            return (PartOfSpeech::Verb, Self::past_tense_base(word));
        }

        if char_count > 4 && word.ends_with("ly") && !self.ly_nouns.contains(word) {
            return (PartOfSpeech::Adverb, word.to_string());
        }

        if char_count > 5 && Self::has_adjective_suffix(word) {
            return (PartOfSpeech::Adjective, word.to_string());
        }

        let has_digit = word.chars().any(|c| c.is_numeric());
        let has_alpha = word.chars().any(|c| c.is_alphabetic());
        if has_digit && has_alpha {
            return (PartOfSpeech::ProperNoun, word.to_string());
        }

        if !has_alpha {
            return (PartOfSpeech::Other, word.to_string());
        }

        (PartOfSpeech::Noun, self.noun_lemma(word))
    }

    /// Rough base form of a regular past tense: studied -> study, designed -> design
    fn past_tense_base(word: &str) -> String {
        if let Some(stem) = word.strip_suffix("ied") {
            return format!("{}y", stem);
        }
        word.strip_suffix("ed").unwrap_or(word).to_string()
    }

    fn has_adjective_suffix(word: &str) -> bool {
        ["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"]
            .iter()
            .any(|suffix| word.ends_with(suffix))
    }

    /// Base form if `word` is an inflection of a known verb
    fn verb_lemma(&self, word: &str) -> Option<String> {
        if let Some(base) = self.irregular_verbs.get(word) {
            return Some(base.to_string());
        }
        if self.verbs.contains(word) {
            return Some(word.to_string());
        }

        for suffix in ["ing", "ed", "es", "s"] {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.chars().count() < 2 {
                continue;
            }

            let mut candidates = vec![stem.to_string()];
            match suffix {
                "ing" | "ed" => {
                    // managing -> manage, planned -> plan
                    candidates.push(format!("{}e", stem));
                    let chars: Vec<char> = stem.chars().collect();
                    if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
                        candidates.push(chars[..chars.len() - 1].iter().collect());
                    }
                    if suffix == "ed" {
                        if let Some(root) = stem.strip_suffix('i') {
                            candidates.push(format!("{}y", root));
                        }
                    }
                }
                "es" => {
                    if let Some(root) = stem.strip_suffix('i') {
                        candidates.push(format!("{}y", root));
                    }
                }
                _ => {}
            }

            if let Some(base) = candidates.into_iter().find(|c| self.verbs.contains(c.as_str())) {
                return Some(base);
            }
        }

        None
    }

    /// Singular form of a common noun
    fn noun_lemma(&self, word: &str) -> String {
        if let Some(singular) = self.irregular_plurals.get(word) {
            return singular.to_string();
        }
        if self.invariant_nouns.contains(word) || word.chars().count() <= 3 {
            return word.to_string();
        }
        if ["ss", "us", "is", "ics"].iter().any(|s| word.ends_with(s)) {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if stem.chars().count() >= 2 {
                return format!("{}y", stem);
            }
        }
        for suffix in ["sses", "ches", "shes", "xes", "zes"] {
            if word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }
        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word.to_string(),
        }
    }

    fn closed_class_lexicon() -> HashMap<&'static str, PartOfSpeech> {
        let mut lexicon = HashMap::new();

        let groups: [(PartOfSpeech, &[&'static str]); 8] = [
            (
                PartOfSpeech::Determiner,
                &[
                    "a", "an", "the", "this", "that", "these", "those", "each", "every", "any",
                    "some", "all", "no", "another", "either", "neither", "both", "such", "much",
                    "many", "few", "several", "other", "whatever", "which",
                ],
            ),
            (
                PartOfSpeech::Pronoun,
                &[
                    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
                    "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours",
                    "theirs", "myself", "yourself", "himself", "herself", "itself", "ourselves",
                    "themselves", "who", "whom", "whose", "what", "someone", "anyone", "everyone",
                    "something", "anything", "everything", "nothing", "one",
                ],
            ),
            (
                PartOfSpeech::Adposition,
                &[
                    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto",
                    "about", "above", "across", "after", "against", "along", "among", "around",
                    "before", "behind", "below", "beneath", "beside", "between", "beyond",
                    "during", "except", "inside", "near", "off", "out", "outside", "over", "per",
                    "since", "through", "throughout", "toward", "towards", "under", "until",
                    "upon", "via", "within", "without", "like", "including",
                ],
            ),
            (
                PartOfSpeech::Conjunction,
                &[
                    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although",
                    "though", "whereas", "unless", "whether", "than", "as", "when", "where",
                    "once", "plus",
                ],
            ),
            (
                PartOfSpeech::Auxiliary,
                &[
                    "be", "is", "are", "was", "were", "been", "being", "am", "have", "has", "had",
                    "having", "do", "does", "did", "will", "would", "can", "could", "shall",
                    "should", "may", "might", "must",
                ],
            ),
            (PartOfSpeech::Particle, &["not", "n't", "up", "down", "s"]),
            (
                PartOfSpeech::Adverb,
                &[
                    "very", "also", "just", "well", "too", "quite", "rather", "often", "always",
                    "never", "sometimes", "already", "still", "even", "ever", "again", "here",
                    "there", "now", "then", "soon", "how", "why", "more", "most", "less", "least",
                    "only", "almost", "perhaps", "together", "away", "back", "etc",
                ],
            ),
            (
                PartOfSpeech::Numeral,
                &[
                    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
                    "eleven", "twelve", "twenty", "hundred", "thousand", "million",
                ],
            ),
        ];

        for (pos, words) in groups {
            for word in words {
                lexicon.insert(*word, pos);
            }
        }

        lexicon
    }

    fn default_adjectives() -> Vec<&'static str> {
        vec![
            "experienced", "skilled", "familiar", "senior", "junior", "strong", "excellent",
            "proficient", "good", "great", "new", "large", "small", "high", "low", "big",
            "solid", "deep", "broad", "advanced", "basic", "modern", "scalable", "reliable",
            "distributed", "remote", "hybrid", "agile", "technical", "professional", "relevant",
            "related", "required", "preferred", "key", "main", "core", "full", "complex",
            "responsible", "analytical", "creative", "effective", "efficient", "independent",
            "fast", "quick", "open", "public", "private", "native", "secure", "robust",
            "passionate", "motivated", "dynamic", "innovative", "collaborative",
            "best", "better", "top", "leading", "current", "previous", "recent",
            "various", "multiple", "different", "similar", "common", "standard", "global",
            "international", "local", "internal", "external", "digital", "mobile", "frontend",
            "backend", "fullstack", "automated", "certified", "qualified", "able", "capable",
            "eager", "keen", "comfortable", "bachelor", "master", "additional", "plus",
        ]
    }

    fn default_verbs() -> Vec<&'static str> {
        vec![
            "look", "seek", "build", "develop", "manage", "join", "use", "create",
            "implement", "maintain", "deliver", "collaborate", "communicate", "write",
            "deploy", "improve", "ensure", "mentor", "participate", "contribute", "define",
            "apply", "hire", "want", "make", "take", "get", "give", "know", "understand",
            "learn", "grow", "optimize", "automate", "integrate", "migrate", "troubleshoot",
            "coordinate", "oversee", "analyze", "analyse", "solve", "translate", "enable",
            "provide", "require", "prefer", "include", "thrive", "achieve", "increase",
            "reduce", "ship", "establish", "evaluate", "identify", "demonstrate", "possess",
            "enjoy", "become", "bring", "keep", "operate", "execute", "spearhead",
            "streamline", "foster", "empower",
        ]
    }

    fn irregular_verb_forms() -> Vec<(&'static str, &'static str)> {
        vec![
            ("built", "build"),
            ("led", "lead"),
            ("wrote", "write"),
            ("written", "write"),
            ("made", "make"),
            ("took", "take"),
            ("taken", "take"),
            ("got", "get"),
            ("gotten", "get"),
            ("gave", "give"),
            ("given", "give"),
            ("knew", "know"),
            ("known", "know"),
            ("understood", "understand"),
            ("grew", "grow"),
            ("grown", "grow"),
            ("sought", "seek"),
            ("brought", "bring"),
            ("kept", "keep"),
            ("ran", "run"),
            ("became", "become"),
            ("learnt", "learn"),
            ("oversaw", "oversee"),
            ("overseen", "oversee"),
        ]
    }

    fn irregular_plural_forms() -> Vec<(&'static str, &'static str)> {
        vec![
            ("people", "person"),
            ("children", "child"),
            ("men", "man"),
            ("women", "woman"),
            ("teeth", "tooth"),
            ("feet", "foot"),
            ("mice", "mouse"),
            ("indices", "index"),
            ("matrices", "matrix"),
            ("vertices", "vertex"),
            ("criteria", "criterion"),
            ("phenomena", "phenomenon"),
            ("analyses", "analysis"),
            ("responsibilities", "responsibility"),
        ]
    }

    fn default_proper_nouns() -> Vec<&'static str> {
        vec![
            // Languages
            "python", "java", "javascript", "typescript", "rust", "golang", "ruby", "php",
            "swift", "kotlin", "scala", "haskell", "clojure", "elixir", "erlang", "perl",
            "matlab", "cobol", "fortran", "sql", "nosql", "html", "css", "sass", "bash",
            "powershell", "solidity",
            // Frameworks and libraries
            "django", "flask", "fastapi", "rails", "spring", "laravel", "symfony", "express",
            "react", "vue", "angular", "svelte", "nextjs", "nuxt", "jquery", "bootstrap",
            "tailwind", "pandas", "numpy", "scipy", "tensorflow", "pytorch", "keras", "sklearn",
            "spark", "hadoop", "kafka", "airflow", "dbt", "graphql", "grpc", "nodejs", "dotnet",
            "tokio", "actix", "junit", "pytest", "jest", "selenium", "cypress",
            // Infrastructure and platforms
            "aws", "azure", "gcp", "kubernetes", "docker", "terraform", "ansible", "jenkins",
            "gitlab", "github", "bitbucket", "linux", "unix", "windows", "macos", "ios",
            "android", "nginx", "apache", "redis", "postgresql", "postgres", "mysql", "mongodb",
            "cassandra", "dynamodb", "sqlite", "oracle", "elasticsearch", "snowflake",
            "databricks", "tableau", "salesforce", "jira", "confluence", "slack", "git", "helm",
            "prometheus", "grafana", "datadog", "openshift", "heroku", "vercel", "netlify",
            "lambda", "ec2", "s3",
            // Organisations and methodologies
            "google", "amazon", "microsoft", "meta", "apple", "netflix", "ibm", "scrum",
            "kanban", "devops", "sre", "saas", "api", "rest", "ci", "cd",
        ]
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.unicode_words()
            .map(|word| {
                let lower = word.to_lowercase();
                let (pos, lemma) = self.tag_word(&lower);
                TaggedToken {
                    lemma,
                    pos,
                    surface_len: word.chars().count(),
                }
            })
            .collect()
    }
}
