//! Immutable reference content: myth/fact records, recovery stories,
//! prompts, and the scripted companion's reply table. Loaded once into the
//! binary; nothing at runtime mutates these.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MythFact {
    pub id: &'static str,
    pub myth: &'static str,
    pub fact: &'static str,
    pub category: &'static str,
    pub sources: &'static [&'static str],
    pub read_time: &'static str,
    pub difficulty: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub person: &'static str,
    pub condition: &'static str,
    pub summary: &'static str,
    pub full_story: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
    pub inspiration: &'static str,
}

pub static MYTHS: &[MythFact] = &[
    MythFact {
        id: "1",
        myth: "Mental health problems are a sign of weakness",
        fact: "Mental health conditions are medical conditions, just like diabetes or heart disease. They are not a sign of weakness or a character flaw. They can affect anyone regardless of age, gender, race, or background.",
        category: "General",
        sources: &["National Institute of Mental Health", "World Health Organization"],
        read_time: "2 min",
        difficulty: "Beginner",
        tags: &["stigma", "strength", "medical"],
    },
    MythFact {
        id: "2",
        myth: "Therapy is only for people with serious mental illness",
        fact: "Therapy can benefit anyone who wants to improve their mental health, develop coping skills, or work through life challenges. You don't need to have a diagnosed mental illness to benefit from therapy.",
        category: "Treatment",
        sources: &["American Psychological Association", "Mental Health America"],
        read_time: "3 min",
        difficulty: "Beginner",
        tags: &["therapy", "treatment", "prevention"],
    },
    MythFact {
        id: "3",
        myth: "Antidepressants change your personality",
        fact: "When properly prescribed and monitored, antidepressants help restore normal brain chemistry and can help you feel more like yourself again. They don't change your core personality traits.",
        category: "Medication",
        sources: &["Mayo Clinic", "Harvard Medical School"],
        read_time: "4 min",
        difficulty: "Intermediate",
        tags: &["medication", "antidepressants", "personality"],
    },
    MythFact {
        id: "4",
        myth: "Children don't experience mental health problems",
        fact: "Mental health conditions can affect children and adolescents. In fact, 50% of all lifetime mental health disorders begin by age 14. Early intervention is crucial for better outcomes.",
        category: "Age Groups",
        sources: &["CDC", "National Alliance on Mental Illness"],
        read_time: "3 min",
        difficulty: "Beginner",
        tags: &["children", "adolescents", "early intervention"],
    },
    MythFact {
        id: "5",
        myth: "People with mental illness are violent and dangerous",
        fact: "The vast majority of people with mental health conditions are not violent. In fact, they are more likely to be victims of violence than perpetrators. Only 3-5% of violent acts are committed by people with serious mental illness.",
        category: "Stigma",
        sources: &["National Institute of Mental Health", "Treatment Advocacy Center"],
        read_time: "4 min",
        difficulty: "Intermediate",
        tags: &["violence", "stigma", "safety"],
    },
    MythFact {
        id: "6",
        myth: "Mental health problems are permanent",
        fact: "With proper treatment and support, people with mental health conditions can and do recover. Many people live full, productive lives while managing their mental health conditions.",
        category: "Recovery",
        sources: &["SAMHSA", "National Alliance on Mental Illness"],
        read_time: "3 min",
        difficulty: "Beginner",
        tags: &["recovery", "treatment", "hope"],
    },
];

pub static MYTH_CATEGORIES: &[&str] = &[
    "All",
    "General",
    "Treatment",
    "Medication",
    "Age Groups",
    "Stigma",
    "Recovery",
];

pub static STORIES: &[Story] = &[
    Story {
        id: "1",
        title: "From Darkness to Light",
        person: "Dwayne 'The Rock' Johnson",
        condition: "Depression",
        summary: "How the world's highest-paid actor overcame depression and found his purpose.",
        full_story: "Dwayne Johnson has been open about his struggles with depression, particularly during his teenage years and early twenties. After his football dreams were crushed by injuries, he found himself battling feelings of worthlessness and despair. Through therapy, support from loved ones, and finding new purpose in wrestling and later acting, he transformed his pain into strength. Today, he uses his platform to encourage others to seek help and break the stigma around mental health.",
        category: "Celebrity",
        read_time: "4 min",
        tags: &["depression", "purpose", "resilience"],
        inspiration: "Your struggles don't define you - how you overcome them does.",
    },
    Story {
        id: "2",
        title: "Breaking the Silence",
        person: "Simone Biles",
        condition: "Anxiety & Trauma",
        summary: "The gymnastics champion's journey through trauma and prioritizing mental health.",
        full_story: "Simone Biles shocked the world when she withdrew from Olympic events to focus on her mental health. Having survived abuse and dealing with intense pressure, she made the brave decision to prioritize her well-being over competition. Her openness about therapy, medication, and the importance of mental health has inspired countless athletes and individuals to seek help. She returned stronger, winning more medals and becoming an advocate for mental health awareness.",
        category: "Celebrity",
        read_time: "5 min",
        tags: &["anxiety", "trauma", "courage", "therapy"],
        inspiration: "It's okay to not be okay, and it's brave to ask for help.",
    },
    Story {
        id: "3",
        title: "A Teacher's Transformation",
        person: "Sarah M.",
        condition: "Burnout & Anxiety",
        summary: "How a dedicated teacher learned to manage anxiety and prevent burnout.",
        full_story: "Sarah was a passionate teacher who gave everything to her students, but gradually found herself overwhelmed by anxiety and heading toward burnout. She started experiencing panic attacks and couldn't sleep. Through counseling, mindfulness practices, and learning to set boundaries, she discovered how to maintain her passion for teaching while protecting her mental health. She now mentors other educators on sustainable teaching practices and self-care.",
        category: "Community",
        read_time: "3 min",
        tags: &["burnout", "anxiety", "boundaries", "mindfulness"],
        inspiration: "Taking care of yourself isn't selfish - it's necessary.",
    },
    Story {
        id: "4",
        title: "The Innovator's Mind",
        person: "Temple Grandin",
        condition: "Autism & Anxiety",
        summary: "How autism became a superpower in revolutionizing animal welfare.",
        full_story: "Temple Grandin was diagnosed with autism at a time when little was understood about the condition. Despite facing social challenges and anxiety, she channeled her unique way of thinking into groundbreaking work in animal science. Her visual thinking abilities allowed her to design more humane livestock facilities. She became a professor, author, and advocate, showing the world that neurological differences can be strengths rather than limitations.",
        category: "Historical",
        read_time: "6 min",
        tags: &["autism", "innovation", "acceptance", "strengths"],
        inspiration: "Different doesn't mean less - it can mean extraordinary.",
    },
    Story {
        id: "5",
        title: "From Addiction to Advocacy",
        person: "Robert Downey Jr.",
        condition: "Addiction & Depression",
        summary: "The Iron Man star's journey from addiction to becoming a mental health advocate.",
        full_story: "Robert Downey Jr.'s struggles with addiction and depression were highly publicized, leading to multiple arrests and career setbacks. His journey to recovery involved therapy, meditation, and a strong support system. He credits his wife, structured routine, and commitment to personal growth for his transformation. Now one of Hollywood's most successful actors, he openly discusses the importance of mental health and continues to support others in recovery.",
        category: "Celebrity",
        read_time: "5 min",
        tags: &["addiction", "recovery", "support", "transformation"],
        inspiration: "Recovery is possible, and every day is a new chance to grow.",
    },
    Story {
        id: "6",
        title: "A Student's Strength",
        person: "Marcus T.",
        condition: "Social Anxiety",
        summary: "How a college student overcame social anxiety to become a peer counselor.",
        full_story: "Marcus struggled with severe social anxiety throughout high school, often skipping classes and avoiding social situations. In college, he decided to seek help through the campus counseling center. Through cognitive behavioral therapy and gradual exposure exercises, he learned to manage his anxiety. He joined support groups, made friends, and eventually became a peer counselor, helping other students navigate their mental health challenges.",
        category: "Community",
        read_time: "4 min",
        tags: &["social anxiety", "therapy", "peer support", "growth"],
        inspiration: "Small steps forward are still progress.",
    },
];

pub static STORY_CATEGORIES: &[&str] = &["All", "Celebrity", "Community", "Historical"];

pub static JOURNAL_PROMPTS: &[&str] = &[
    "What am I grateful for today?",
    "What challenged me today and how did I handle it?",
    "What made me smile today?",
    "What would I like to improve about today?",
    "What am I looking forward to tomorrow?",
    "How did I take care of myself today?",
    "What emotions did I experience today?",
    "What did I learn about myself today?",
];

pub static JOURNAL_TAGS: &[&str] = &[
    "gratitude",
    "anxiety",
    "work",
    "family",
    "health",
    "goals",
    "reflection",
    "growth",
];

pub static MOOD_FACTORS: &[&str] = &[
    "Sleep",
    "Exercise",
    "Work",
    "Relationships",
    "Weather",
    "Health",
    "Social",
    "Stress",
    "Diet",
    "Meditation",
    "Family",
    "Hobbies",
];

pub static CONVERSATION_STARTERS: &[&str] = &[
    "I'm feeling anxious about work lately",
    "I've been having trouble sleeping",
    "I want to work on my self-confidence",
    "I'm dealing with relationship stress",
    "I feel overwhelmed with daily tasks",
    "I want to practice mindfulness",
];

pub static COMPANION_GREETING: &str = "Hello! I'm Dr. Sage, your AI therapy companion. I'm here to provide a safe, non-judgmental space for you to share your thoughts and feelings. How are you doing today?";

pub static SCRIPTED_REPLIES: &[&str] = &[
    "I hear that you're going through a challenging time. Can you tell me more about what specifically is causing you to feel this way?",
    "It sounds like you're dealing with a lot right now. Remember that it's completely normal to feel overwhelmed sometimes. What do you think might help you feel more grounded?",
    "Thank you for sharing that with me. Your feelings are valid, and I'm here to support you. What would you like to explore further about this situation?",
    "I appreciate your openness in sharing this. It takes courage to talk about difficult feelings. How long have you been experiencing this?",
    "That sounds really difficult. You're taking a positive step by talking about it. What coping strategies have you tried before?",
];

/// Case-insensitive substring search over myth, fact, and tags, with an
/// optional category filter ("All" disables it).
pub fn filter_myths(term: &str, category: &str) -> Vec<&'static MythFact> {
    let term = term.to_lowercase();
    MYTHS
        .iter()
        .filter(|m| {
            let matches_search = m.myth.to_lowercase().contains(&term)
                || m.fact.to_lowercase().contains(&term)
                || m.tags.iter().any(|t| t.to_lowercase().contains(&term));
            let matches_category = category == "All" || m.category == category;
            matches_search && matches_category
        })
        .collect()
}

/// Same match semantics the stories page uses: title, person, condition,
/// or tags.
pub fn filter_stories(term: &str, category: &str) -> Vec<&'static Story> {
    let term = term.to_lowercase();
    STORIES
        .iter()
        .filter(|s| {
            let matches_search = s.title.to_lowercase().contains(&term)
                || s.person.to_lowercase().contains(&term)
                || s.condition.to_lowercase().contains(&term)
                || s.tags.iter().any(|t| t.to_lowercase().contains(&term));
            let matches_category = category == "All" || s.category == category;
            matches_search && matches_category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_matches_everything() {
        assert_eq!(filter_myths("", "All").len(), MYTHS.len());
        assert_eq!(filter_stories("", "All").len(), STORIES.len());
    }

    #[test]
    fn test_category_filter() {
        let celebrity = filter_stories("", "Celebrity");
        assert_eq!(celebrity.len(), 3);
        assert!(celebrity.iter().all(|s| s.category == "Celebrity"));
    }

    #[test]
    fn test_category_tables_partition_the_content() {
        // Every non-"All" category in the tables matches at least one item,
        // and the per-category buckets add back up to the full lists.
        let myth_total: usize = MYTH_CATEGORIES
            .iter()
            .filter(|c| **c != "All")
            .map(|c| {
                let hits = filter_myths("", c);
                assert!(!hits.is_empty(), "empty myth category {c}");
                hits.len()
            })
            .sum();
        assert_eq!(myth_total, MYTHS.len());

        let story_total: usize = STORY_CATEGORIES
            .iter()
            .filter(|c| **c != "All")
            .map(|c| filter_stories("", c).len())
            .sum();
        assert_eq!(story_total, STORIES.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = filter_myths("THERAPY", "All");
        assert!(!hits.is_empty());
    }

    #[test]
    fn test_search_matches_tags_only() {
        // "peer support" appears only in story 6's tags.
        let hits = filter_stories("peer support", "All");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "6");
    }

    #[test]
    fn test_search_and_category_combined() {
        let hits = filter_myths("treatment", "Recovery");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "6");
    }
}
