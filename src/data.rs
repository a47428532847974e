use chrono::NaiveDate;

use crate::boundary::SectionError;

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Anusara Sugeeshwara",
    title: "Data Scientist & ML Engineer",
    email: "contact@example.com",
    location: "Moratuwa, Sri Lanka",
    github: "https://github.com/kasrsu",
    linkedin: "https://www.linkedin.com/in/anusara-sugeeshwara/",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Technical,
    DataScience,
    MachineLearning,
    DeepLearning,
    GraphAnalytics,
    Nlp,
    Visualization,
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 8] = [
        SkillCategory::Technical,
        SkillCategory::DataScience,
        SkillCategory::MachineLearning,
        SkillCategory::DeepLearning,
        SkillCategory::GraphAnalytics,
        SkillCategory::Nlp,
        SkillCategory::Visualization,
        SkillCategory::SoftSkills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::DataScience => "Data Science",
            SkillCategory::MachineLearning => "Machine Learning",
            SkillCategory::DeepLearning => "Deep Learning",
            SkillCategory::GraphAnalytics => "Graph-Based Analytics",
            SkillCategory::Nlp => "Natural Language Processing",
            SkillCategory::Visualization => "Data Visualization",
            SkillCategory::SoftSkills => "Soft Skills",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SkillCategory::Technical => "#3776AB",
            SkillCategory::DataScience => "#9D44B5",
            SkillCategory::MachineLearning => "#FF6B6B",
            SkillCategory::DeepLearning | SkillCategory::GraphAnalytics => "#6C5CE7",
            SkillCategory::Nlp => "#6C3483",
            SkillCategory::Visualization => "#F9A03F",
            SkillCategory::SoftSkills => "#7CB9E8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 0-100
    pub proficiency: u8,
    pub category: SkillCategory,
}

impl Skill {
    const fn new(name: &'static str, proficiency: u8, category: SkillCategory) -> Self {
        Self {
            name,
            proficiency,
            category,
        }
    }

    pub fn checked(&self) -> Result<&Self, SectionError> {
        if self.proficiency > 100 {
            return Err(SectionError::InvalidData(format!(
                "proficiency of {} is {}",
                self.name, self.proficiency
            )));
        }
        Ok(self)
    }
}

use SkillCategory as S;

pub static SKILLS: &[Skill] = &[
    Skill::new("Python", 95, S::Technical),
    Skill::new("JavaScript", 90, S::Technical),
    Skill::new("R", 80, S::Technical),
    Skill::new("MATLAB", 75, S::Technical),
    Skill::new("SQL", 85, S::Technical),
    Skill::new("Git", 90, S::Technical),
    Skill::new("Jupyter Notebook", 90, S::Technical),
    Skill::new("Flask", 80, S::Technical),
    Skill::new("Node.js", 80, S::Technical),
    Skill::new("React Native", 75, S::Technical),
    Skill::new("Neo4j", 70, S::Technical),
    Skill::new("Core ML Algorithms", 90, S::DataScience),
    Skill::new("Unsupervised Learning", 80, S::DataScience),
    Skill::new("Feature Selection", 80, S::DataScience),
    Skill::new("Hyperparameter Tuning", 75, S::DataScience),
    Skill::new("Data Wrangling & Feature Engineering", 90, S::DataScience),
    Skill::new("Predictive Modeling", 85, S::DataScience),
    Skill::new("Time-Series Forecasting", 80, S::DataScience),
    Skill::new("Big Data & Distributed Computing", 70, S::DataScience),
    Skill::new("Model Evaluation & Explainability", 80, S::DataScience),
    Skill::new("Machine Learning", 90, S::MachineLearning),
    Skill::new("Reinforcement Learning", 70, S::MachineLearning),
    Skill::new("Neural Networks", 85, S::DeepLearning),
    Skill::new("Graph Neural Networks", 70, S::DeepLearning),
    Skill::new("Graph-Based Analytics", 75, S::GraphAnalytics),
    Skill::new("Natural Language Processing", 85, S::Nlp),
    Skill::new("Text Processing", 80, S::Nlp),
    Skill::new("Language Models", 80, S::Nlp),
    Skill::new("spaCy", 75, S::Nlp),
    Skill::new("LangChain", 70, S::Nlp),
    Skill::new("Hugging Face Transformers", 80, S::Nlp),
    Skill::new("Matplotlib / Seaborn", 95, S::Visualization),
    Skill::new("Communication", 90, S::SoftSkills),
    Skill::new("Project Management", 85, S::SoftSkills),
    Skill::new("Problem Solving", 95, S::SoftSkills),
    Skill::new("Team Leadership", 85, S::SoftSkills),
];

/// Skills grouped by category, in category order, empty groups dropped.
pub fn skills_by_category() -> Vec<(SkillCategory, Vec<&'static Skill>)> {
    SkillCategory::ALL
        .into_iter()
        .map(|c| (c, SKILLS.iter().filter(|s| s.category == c).collect::<Vec<_>>()))
        .filter(|(_, skills)| !skills.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    MachineLearning,
    DataAnalysis,
    Visualization,
    Nlp,
    Research,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::MachineLearning,
        ProjectCategory::DataAnalysis,
        ProjectCategory::Visualization,
        ProjectCategory::Nlp,
        ProjectCategory::Research,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::MachineLearning => "Machine Learning",
            ProjectCategory::DataAnalysis => "Data Analysis",
            ProjectCategory::Visualization => "Data Visualization",
            ProjectCategory::Nlp => "NLP",
            ProjectCategory::Research => "Research",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub code_url: Option<&'static str>,
    pub featured: bool,
    /// `YYYY-MM`
    pub date: &'static str,
    pub duration: Option<&'static str>,
}

impl Project {
    pub fn started(&self) -> Result<NaiveDate, SectionError> {
        NaiveDate::parse_from_str(&format!("{}-01", self.date), "%Y-%m-%d").map_err(|_| {
            SectionError::InvalidData(format!("bad date {:?} for {}", self.date, self.id))
        })
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .technologies
                .iter()
                .any(|t| t.to_lowercase().contains(&query))
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "proj-1",
        title: "AI-Powered Educational Guidance System",
        description: "An AI chatbot using Ollama and Neo4j for semantic search, analyzing user prompts to deliver personalized, resource-rich course recommendations for IT students.",
        points: &[
            "Developed a semantic search engine on a Neo4j knowledge graph.",
            "Integrated a local LLM for natural language understanding and response generation.",
            "Ran user testing to refine chatbot interactions and improve recommendations.",
        ],
        technologies: &["React Native", "Expo", "Neo4j", "LangChain", "Ollama", "TypeScript"],
        category: ProjectCategory::MachineLearning,
        code_url: None,
        featured: true,
        date: "2025-03",
        duration: Some("4 months"),
    },
    Project {
        id: "proj-2",
        title: "Business Process Mining - University Student Enrollment",
        description: "Alpha Miner and Heuristic Miner process models built from enrollment event logs to find inefficiencies, with dashboards for stakeholders.",
        points: &[
            "Applied Alpha Miner and Heuristic Miner algorithms to event logs.",
            "Cleaned and preprocessed the logs in R.",
            "Built dashboards to communicate the findings.",
        ],
        technologies: &["R", "Process Mining", "Alpha Miner", "Heuristic Miner", "Data Visualization"],
        category: ProjectCategory::DataAnalysis,
        code_url: None,
        featured: false,
        date: "2023-06",
        duration: Some("3 months"),
    },
    Project {
        id: "proj-3",
        title: "End-to-End NLP System for Text Classification and Humanization",
        description: "An AI text humanizer and a human vs. AI classifier built on BERT models, trained on a custom dataset of scraped pre-2019 articles and their AI rewrites.",
        points: &[
            "Built the humanizer and the classifier on BERT.",
            "Created the paired dataset by scraping and rewriting articles.",
            "Used LDA topic modeling and Word2Vec/Doc2Vec clustering for analysis.",
        ],
        technologies: &["Python", "NLTK", "spaCy", "TensorFlow", "PyTorch", "Hugging Face"],
        category: ProjectCategory::Nlp,
        code_url: None,
        featured: true,
        date: "2024-05",
        duration: Some("6 months"),
    },
    Project {
        id: "proj-4",
        title: "User Authentication via Acceleration Data",
        description: "A feedforward MLP authentication system trained on device acceleration data, reaching 96% accuracy and 97% recall.",
        points: &[
            "Compared ANOVA, PCA, reliability ratio and mutual information for feature selection.",
            "Trained and tuned the network in MATLAB.",
        ],
        technologies: &["MATLAB", "MLP Neural Networks", "PCA", "ANOVA", "Feature Selection"],
        category: ProjectCategory::MachineLearning,
        code_url: None,
        featured: false,
        date: "2022-10",
        duration: Some("2 months"),
    },
    Project {
        id: "proj-5",
        title: "AI Tour Guide LLM Integration with LangChain",
        description: "A tour guide assistant built with LangChain that turns prompts into travel recommendations and itineraries from several data sources.",
        points: &[
            "Built the recommendation flow with LangChain.",
            "Integrated multiple data sources for up-to-date suggestions.",
        ],
        technologies: &["LangChain", "Python", "AI", "Chatbot Development"],
        category: ProjectCategory::MachineLearning,
        code_url: None,
        featured: false,
        date: "2023-12",
        duration: Some("3 months"),
    },
    Project {
        id: "proj-6",
        title: "Weather Forecast App",
        description: "A forecasting app comparing ARIMA, SARIMA and Prophet on historical data, deployed with Streamlit.",
        points: &[
            "Performed EDA and time series decomposition.",
            "Evaluated models on accuracy and mean absolute error.",
        ],
        technologies: &["Python", "Streamlit", "ARIMA", "SARIMA", "Prophet", "Time Series Analysis"],
        category: ProjectCategory::DataAnalysis,
        code_url: None,
        featured: false,
        date: "2023-08",
        duration: Some("4 months"),
    },
    Project {
        id: "proj-7",
        title: "Loan Repayment Prediction System",
        description: "A model predicting loan repayment probability from financial and behavioral data, with outlier handling, feature engineering and monitoring.",
        points: &[
            "Removed outliers with z-scores and IQR.",
            "Compared logistic regression, decision trees, random forests and gradient boosting.",
            "Evaluated with precision, recall, F1 and ROC-AUC.",
        ],
        technologies: &["Python", "Scikit-learn", "Pandas", "Matplotlib", "Gradient Boosting", "Logistic Regression"],
        category: ProjectCategory::DataAnalysis,
        code_url: None,
        featured: false,
        date: "2024-02",
        duration: Some("5 months"),
    },
];

/// Projects in `category` (all when `None`) whose title, description or
/// technologies contain `query`, case-insensitively.
pub fn projects_matching(category: Option<ProjectCategory>, query: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| p.matches(query))
        .collect()
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        title: "BSc (Hons) in Data Science",
        organization: "NSBM Green University / Plymouth University",
        location: "Homagama, Sri Lanka",
        start: "2021",
        end: "Present",
        description: "Honours degree in Data Science offered with Plymouth University (UK).",
        highlights: &[
            "Coursework in statistics, machine learning and data visualization",
            "Data analysis projects and research initiatives",
            "Team-based data science challenges",
        ],
    },
    Experience {
        title: "GCE A/levels",
        organization: "Prince of Wales College",
        location: "Moratuwa, Sri Lanka",
        start: "2018",
        end: "2020",
        description: "Mathematics stream with IT specialization.",
        highlights: &[
            "Specialized in Mathematics and IT",
            "Programming competitions and IT projects",
        ],
    },
];

pub struct Statistic {
    pub value: u32,
    pub label: &'static str,
}

pub static STATISTICS: &[Statistic] = &[
    Statistic {
        value: 10,
        label: "Projects Completed",
    },
    Statistic {
        value: 3,
        label: "Years Experience",
    },
    Statistic {
        value: 5,
        label: "Awards & Certifications",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_data_is_valid() {
        for skill in SKILLS {
            assert!(skill.checked().is_ok(), "{}", skill.name);
        }
        for project in PROJECTS {
            assert!(project.started().is_ok(), "{}", project.id);
        }
    }

    #[test]
    fn test_invalid_data_is_reported() {
        let broken = Project {
            date: "March 2025",
            ..PROJECTS[0]
        };
        assert!(matches!(broken.started(), Err(SectionError::InvalidData(_))));

        let skill = Skill::new("Overconfidence", 140, SkillCategory::SoftSkills);
        assert!(skill.checked().is_err());
    }

    #[test]
    fn test_project_filters() {
        assert_eq!(projects_matching(None, "").len(), PROJECTS.len());

        let nlp = projects_matching(Some(ProjectCategory::Nlp), "");
        assert_eq!(nlp.len(), 1);
        assert_eq!(nlp[0].id, "proj-3");

        // technology match, case-insensitive
        let neo = projects_matching(None, "NEO4J");
        assert_eq!(neo.len(), 1);
        assert_eq!(neo[0].id, "proj-1");

        // category and query combine
        let python_analysis = projects_matching(Some(ProjectCategory::DataAnalysis), "python");
        assert!(python_analysis.iter().all(|p| p.category == ProjectCategory::DataAnalysis));
        assert_eq!(python_analysis.len(), 2);

        assert!(projects_matching(Some(ProjectCategory::Research), "").is_empty());
        assert_eq!(featured_projects().count(), 2);
    }

    #[test]
    fn test_skill_groups() {
        let groups = skills_by_category();
        assert_eq!(groups.len(), SkillCategory::ALL.len());
        assert_eq!(groups[0].0, SkillCategory::Technical);
        let total: usize = groups.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(total, SKILLS.len());
    }
}
