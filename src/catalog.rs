// src/catalog.rs
//! In-memory portfolio content, built once at startup
//!
//! Every date literal is parsed while the catalog is built, so a malformed
//! constant stops the server from starting instead of being served.

use anyhow::{Context, Result};
use tracing::info;

use crate::core::recency::parse_date;
use crate::types::{
    Award, Badge, BlogPost, Certificate, Contact, Cv, Education, Experience, Language, Profile,
};

#[derive(Debug, Clone)]
pub struct Catalog {
    profile: Profile,
    posts: Vec<BlogPost>,
    featured_post: BlogPost,
    cv: Cv,
    certificates: Vec<Certificate>,
    badges: Vec<Badge>,
}

impl Catalog {
    /// Build the catalog from the literal portfolio content
    pub fn load() -> Result<Self> {
        let catalog = Self {
            profile: profile(),
            posts: blog_posts().context("Failed to build blog posts")?,
            featured_post: featured_post().context("Failed to build featured blog post")?,
            cv: cv().context("Failed to build CV")?,
            certificates: certificates().context("Failed to build certificates")?,
            badges: badges().context("Failed to build badges")?,
        };

        info!(
            "Catalog loaded: {} posts, {} education, {} experience, {} certificates, {} badges",
            catalog.posts.len(),
            catalog.cv.education.len(),
            catalog.cv.experience.len(),
            catalog.certificates.len(),
            catalog.badges.len()
        );

        Ok(catalog)
    }

    pub fn profile(&self) -> Profile {
        self.profile.clone()
    }

    pub fn blog_posts(&self) -> Vec<BlogPost> {
        self.posts.clone()
    }

    /// The featured post, served under whatever id was requested
    pub fn blog_post(&self, id: &str) -> BlogPost {
        self.featured_post.clone().with_id(id)
    }

    /// CV with education, experience, certificates and badges most recent first
    pub fn cv(&self) -> Cv {
        let mut cv = self.cv.clone();
        cv.sort_by_recency();
        cv
    }

    pub fn certificates(&self) -> Vec<Certificate> {
        self.certificates.clone()
    }

    pub fn badges(&self) -> Vec<Badge> {
        self.badges.clone()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn certificate(
    id: &str,
    name: &str,
    issuer: &str,
    issued: &str,
    description: &str,
    image_url: &str,
) -> Result<Certificate> {
    Ok(Certificate {
        id: id.to_string(),
        name: name.to_string(),
        issuer: issuer.to_string(),
        issue_date: parse_date(issued).with_context(|| format!("Certificate {:?}", name))?,
        description: description.to_string(),
        image_url: image_url.to_string(),
    })
}

fn badge(
    id: &str,
    name: &str,
    issuer: &str,
    issued: &str,
    description: &str,
    image_url: &str,
) -> Result<Badge> {
    Ok(Badge {
        id: id.to_string(),
        name: name.to_string(),
        issuer: issuer.to_string(),
        issue_date: parse_date(issued).with_context(|| format!("Badge {:?}", name))?,
        description: description.to_string(),
        image_url: image_url.to_string(),
    })
}

fn post(
    id: &str,
    title: &str,
    summary: &str,
    content: &str,
    published: &str,
    tags: &[&str],
) -> Result<BlogPost> {
    Ok(BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        content: content.to_string(),
        publish_date: parse_date(published).with_context(|| format!("Blog post {:?}", title))?,
        tags: strings(tags),
    })
}

fn profile() -> Profile {
    Profile {
        name: "Vincent".to_string(),
        title: "Full Stack Developer".to_string(),
        description: "Passionate developer with expertise in Golang, Next.js, and more.".to_string(),
        skills: strings(&["Golang", "Next.js", "React", "TypeScript", "Node.js", "Docker"]),
        contact: Contact {
            email: "lehoangdung.hcmus@gmail.com".to_string(),
            linkedin: None,
            github: Some("https://github.com/lehoangdung0412".to_string()),
            facebook: Some("https://www.facebook.com/le.hoangdung.37".to_string()),
        },
    }
}

fn blog_posts() -> Result<Vec<BlogPost>> {
    Ok(vec![
        post(
            "1",
            "Getting Started with Golang",
            "A beginner's guide to Golang programming",
            "This is a placeholder for the blog content...",
            "2023-05-01",
            &["golang", "programming", "tutorial"],
        )?,
        post(
            "2",
            "Next.js and Chakra UI: A Perfect Combination",
            "How to build beautiful UIs with Next.js and Chakra UI",
            "This is a placeholder for the blog content...",
            "2023-05-15",
            &["nextjs", "chakraui", "frontend", "tutorial"],
        )?,
    ])
}

fn featured_post() -> Result<BlogPost> {
    post(
        "1",
        "Getting Started with Golang",
        "A beginner's guide to Golang programming",
        "This is a placeholder for the full blog content...",
        "2023-05-01",
        &["golang", "programming", "tutorial"],
    )
}

fn certificates() -> Result<Vec<Certificate>> {
    Ok(vec![
        certificate(
            "1",
            "AWS Certified Developer",
            "Amazon Web Services",
            "2022-01-15",
            "Certification for AWS cloud development",
            "/certificates/aws-developer.jpg",
        )?,
        certificate(
            "2",
            "Certified Kubernetes Administrator",
            "Cloud Native Computing Foundation",
            "2022-06-20",
            "Certification for Kubernetes administration",
            "/certificates/cka.jpg",
        )?,
    ])
}

fn badges() -> Result<Vec<Badge>> {
    Ok(vec![
        badge(
            "1",
            "Hacktoberfest 2022",
            "DigitalOcean",
            "2022-10-31",
            "Participated in Hacktoberfest 2022",
            "/badges/hacktoberfest-2022.jpg",
        )?,
        badge(
            "2",
            "Google Cloud Certified",
            "Google",
            "2023-02-15",
            "Certified in Google Cloud Platform",
            "/badges/gcp-certified.jpg",
        )?,
    ])
}

const COURSERA_IMAGES: &str =
    "https://s3.amazonaws.com/coursera_assets/meta_images/generated/CERTIFICATE_LANDING_PAGE";

fn coursera_image(code: &str) -> String {
    format!(
        "{}/CERTIFICATE_LANDING_PAGE~{}/CERTIFICATE_LANDING_PAGE~{}.jpeg",
        COURSERA_IMAGES, code, code
    )
}

fn cv() -> Result<Cv> {
    Ok(Cv {
        name: "Nguyen Thi Hue".to_string(),
        title: "Manual Tester".to_string(),
        description: "I am looking forward to learning, leveling up my Testing skillset and \
working in a friendly, dynamic, and creative environment. I would love to apply my knowledge \
to work and contribute to the development of your company. Working in your organization would \
be a great opportunity for me to gain insight into the working environment as well as earning \
valuable experience."
            .to_string(),
        image_url: "https://via.placeholder.com/300".to_string(),
        contact: Contact {
            email: "nguyenthihue14163@gmail.com".to_string(),
            linkedin: Some("https://linkedin.com/in/hue-nguyen-thi-4b3489219".to_string()),
            github: Some("https://github.com/HueYomi".to_string()),
            facebook: None,
        },
        education: vec![
            Education {
                institution: "University of Science".to_string(),
                degree: "Bachelor of Science in Chemistry".to_string(),
                year: "2013-2017".to_string(),
            },
            Education {
                institution: "University of Economics HCM City- Global Economic Center"
                    .to_string(),
                degree: "Import- Export Certificate".to_string(),
                year: "2022".to_string(),
            },
        ],
        experience: vec![
            Experience {
                company: "Final Project at Fresher Training Program".to_string(),
                position: "Manual Tester".to_string(),
                year: "11/2022-12/2023".to_string(),
                description: "Calculate hotel fees based on room type, check-in and check-out \
dates, service fees and discounts if any."
                    .to_string(),
            },
            Experience {
                company: "Learning Testing - Practical Practice Testing VN".to_string(),
                position: "Manual Tester".to_string(),
                year: "09/2023-11/2023".to_string(),
                description: "...".to_string(),
            },
            Experience {
                company: "Habi Baby Clothing".to_string(),
                position: "Co-founder".to_string(),
                year: "02/2021-Present".to_string(),
                description: "A website to introduce products, purchasing instructions and \
contact information for kids and baby fashion shop."
                    .to_string(),
            },
        ],
        skills: strings(&[
            "Postman",
            "SQL Server Config",
            "SQL Server Management",
            "JIRA",
            "Visual Studio Code",
            "Excel",
        ]),
        soft_skills: strings(&[
            "Good in self-directing",
            "Teamwork",
            "Good in management",
            "Problems solving",
            "Working under pressure",
        ]),
        languages: vec![
            Language {
                name: "English".to_string(),
                proficiency: "Basic in communication".to_string(),
            },
            Language {
                name: "Japanese".to_string(),
                proficiency: "N5".to_string(),
            },
            Language {
                name: "Chinese".to_string(),
                proficiency: "Basic in communication".to_string(),
            },
        ],
        awards: vec![
            Award {
                name: "Best Developer Award".to_string(),
                issuer: "Tech Conference 2022".to_string(),
                year: "2022".to_string(),
                description: "Recognized for outstanding contributions to open source projects"
                    .to_string(),
            },
            Award {
                name: "Innovation Prize".to_string(),
                issuer: "Hackathon 2021".to_string(),
                year: "2021".to_string(),
                description: "First place in annual coding competition".to_string(),
            },
        ],
        certificates: vec![
            certificate(
                "1",
                "Introduction to HTML5",
                "University of Michigan",
                "2024-06-24",
                "Certification for HTML5",
                &coursera_image("GSA2JH8BSZDJ"),
            )?,
            certificate(
                "2",
                "Introduction to CSS3",
                "University of Michigan",
                "2024-07-11",
                "Certification for CSS3",
                &coursera_image("T53W29ZF23MF"),
            )?,
            certificate(
                "3",
                "Foundations of Software Testing and Validation",
                "University of Leeds",
                "2024-07-17",
                "Certification for Foundations of Software Testing and Validation",
                &coursera_image("XQQWNRACRWJK"),
            )?,
            certificate(
                "4",
                "Introduction to Databases",
                "Meta",
                "2024-07-21",
                "Certification for Databases",
                &coursera_image("W28FHVTQ67QR"),
            )?,
        ],
        badges: vec![
            badge(
                "1",
                "Hacktoberfest 2022",
                "DigitalOcean",
                "2022-10-31",
                "Participated in Hacktoberfest 2022",
                "https://via.placeholder.com/150?text=Hacktoberfest",
            )?,
            badge(
                "2",
                "Google Cloud Certified",
                "Google",
                "2023-02-15",
                "Certified in Google Cloud Platform",
                "https://via.placeholder.com/150?text=GCP",
            )?,
        ],
        summary: strings(&[
            "Over 5 years of experience in web development",
            "Specialized in building scalable applications",
            "Passionate about clean code and best practices",
            "Continuous learner and technology enthusiast",
        ]),
    })
}
