//! Hand-curated fallback catalog of Indian tech jobs.
//!
//! The correctness backstop: always available, no I/O, cannot fail. Live
//! sources are appended ahead of it, so on key collisions the live record
//! wins during dedup.

use crate::jobs::model::JobRecord;

/// Builds the full static catalog. Records are constructed fresh on every
/// call; the aggregator owns the only long-lived copy.
pub fn catalog() -> Vec<JobRecord> {
    vec![
        job(
            "Java Developer",
            "Infosys",
            "Hyderabad",
            &["Java", "SpringBoot", "SQL", "REST API"],
            "₹6,00,000 – ₹12,00,000 / year",
            "careers@infosys.com",
            "https://www.infosys.com/careers",
            "Join Infosys as a Java Developer and work on enterprise-scale applications. Work with Spring Boot, REST APIs, and microservices.",
            &[
                "Build REST APIs using Spring Boot",
                "Write clean Java code",
                "Collaborate with global teams",
                "Participate in code reviews",
            ],
        ),
        job(
            "Python Developer",
            "TCS",
            "Bangalore",
            &["Python", "Django", "SQL", "AWS"],
            "₹7,00,000 – ₹14,00,000 / year",
            "jobs@tcs.com",
            "https://www.tcs.com/careers",
            "TCS is hiring Python developers for its digital transformation projects. Experience with Django and cloud platforms required.",
            &[
                "Develop Python-based backend services",
                "Work with Django framework",
                "Manage AWS deployments",
                "Write unit tests",
            ],
        ),
        job(
            "Full Stack Developer",
            "Wipro",
            "Pune",
            &["React", "Node", "JavaScript", "MongoDB"],
            "₹8,00,000 – ₹16,00,000 / year",
            "recruitment@wipro.com",
            "https://careers.wipro.com",
            "Wipro is looking for Full Stack Developers to build modern web applications using React and Node.js.",
            &[
                "Build responsive UIs with React",
                "Develop APIs with Node.js",
                "Optimize MongoDB queries",
                "Deploy on cloud platforms",
            ],
        ),
        job(
            "Data Scientist",
            "Accenture",
            "Mumbai",
            &["Python", "Machine Learning", "TensorFlow", "SQL"],
            "₹10,00,000 – ₹22,00,000 / year",
            "india.careers@accenture.com",
            "https://www.accenture.com/in-en/careers",
            "Accenture needs an experienced Data Scientist for building ML models and delivering AI-powered insights.",
            &[
                "Build and train ML models",
                "Analyze large datasets",
                "Create data pipelines",
                "Present insights to stakeholders",
            ],
        ),
        job(
            "DevOps Engineer",
            "HCL Technologies",
            "Noida",
            &["Docker", "Kubernetes", "AWS", "Linux"],
            "₹9,00,000 – ₹18,00,000 / year",
            "careers@hcltech.com",
            "https://www.hcltech.com/careers",
            "HCL is seeking a DevOps Engineer to manage CI/CD pipelines and cloud infrastructure.",
            &[
                "Manage Kubernetes clusters",
                "Set up CI/CD pipelines",
                "Monitor system performance",
                "Automate deployments with Docker",
            ],
        ),
        job(
            "React Frontend Developer",
            "Zoho Corporation",
            "Chennai",
            &["React", "JavaScript", "TypeScript", "CSS", "HTML"],
            "₹7,50,000 – ₹15,00,000 / year",
            "careers@zoho.com",
            "https://careers.zohocorp.com",
            "Zoho is hiring React developers to work on their suite of business products used by millions worldwide.",
            &[
                "Build React components",
                "Work with REST APIs",
                "Optimize web performance",
                "Write unit tests",
            ],
        ),
        job(
            "Machine Learning Engineer",
            "Freshworks",
            "Bangalore",
            &["Python", "Machine Learning", "Deep Learning", "PyTorch"],
            "₹12,00,000 – ₹24,00,000 / year",
            "jobs@freshworks.com",
            "https://www.freshworks.com/company/careers",
            "Freshworks is building AI features for its CRM products and needs ML Engineers to lead model development.",
            &[
                "Train deep learning models",
                "Integrate AI into product features",
                "Optimize model inference",
                "Collaborate with product teams",
            ],
        ),
        job(
            "Android Developer",
            "Paytm",
            "Noida",
            &["Android", "Kotlin", "Java", "REST API"],
            "₹8,00,000 – ₹18,00,000 / year",
            "careers@paytm.com",
            "https://paytm.com/careers",
            "Paytm needs an Android Developer to build and maintain India's leading digital payments app.",
            &[
                "Build Android features in Kotlin",
                "Integrate payment APIs",
                "Ensure app performance",
                "Fix bugs and optimize memory",
            ],
        ),
        job(
            "Backend Developer",
            "Flipkart",
            "Bangalore",
            &["Java", "SpringBoot", "Kafka", "MySQL"],
            "₹14,00,000 – ₹28,00,000 / year",
            "careers@flipkart.com",
            "https://www.flipkart.com/careers",
            "Flipkart is hiring Backend Engineers to build high-scale distributed systems for India's largest e-commerce platform.",
            &[
                "Design microservices",
                "Work with Kafka for event streaming",
                "Optimize MySQL queries",
                "Handle millions of requests per second",
            ],
        ),
        job(
            "Cloud Architect",
            "Tech Mahindra",
            "Hyderabad",
            &["AWS", "Azure", "Docker", "Kubernetes", "Python"],
            "₹18,00,000 – ₹35,00,000 / year",
            "techm.careers@techmahindra.com",
            "https://careers.techmahindra.com",
            "Tech Mahindra requires a Cloud Architect to design and deliver multi-cloud solutions for enterprise clients.",
            &[
                "Design cloud infrastructure",
                "Lead cloud migration projects",
                "Ensure security compliance",
                "Mentor junior engineers",
            ],
        ),
        job(
            "UI/UX Designer",
            "Swiggy",
            "Bangalore",
            &["Figma", "HTML", "CSS", "JavaScript"],
            "₹8,00,000 – ₹16,00,000 / year",
            "careers@swiggy.in",
            "https://careers.swiggy.com",
            "Swiggy is looking for a UI/UX Designer to craft delightful experiences for 10M+ daily users.",
            &[
                "Design user flows and wireframes",
                "Collaborate with product managers",
                "Conduct user research",
                "Create Figma prototypes",
            ],
        ),
        job(
            "iOS Developer",
            "Zomato",
            "Gurgaon",
            &["Swift", "iOS", "REST API", "Xcode"],
            "₹10,00,000 – ₹20,00,000 / year",
            "careers@zomato.com",
            "https://www.zomato.com/careers",
            "Zomato needs a skilled iOS Developer to build and optimize its food delivery app used by millions across India.",
            &[
                "Build Swift-based features",
                "Integrate payment SDKs",
                "Work with REST APIs",
                "Write unit and UI tests",
            ],
        ),
        job(
            "Data Engineer",
            "Ola",
            "Bangalore",
            &["Python", "Spark", "Kafka", "SQL", "AWS"],
            "₹12,00,000 – ₹22,00,000 / year",
            "careers@olacabs.com",
            "https://www.olacabs.com/careers",
            "Ola needs a Data Engineer to build and maintain the data infrastructure powering real-time analytics.",
            &[
                "Build ETL pipelines",
                "Work with Spark and Kafka",
                "Optimize data warehouse",
                "Ensure data quality",
            ],
        ),
        job(
            "Software Engineer",
            "Infosys BPM",
            "Delhi",
            &["Java", "Python", "SQL", "REST API", "Git"],
            "₹5,00,000 – ₹10,00,000 / year",
            "infosysbpm.careers@infosys.com",
            "https://www.infosysbpm.com/careers",
            "Infosys BPM is hiring Software Engineers for business process management and digital solutions.",
            &[
                "Develop Java applications",
                "Write SQL queries",
                "Integrate third-party APIs",
                "Support production systems",
            ],
        ),
        job(
            "QA Engineer",
            "Capgemini",
            "Mumbai",
            &["Python", "Selenium", "SQL", "REST API"],
            "₹5,50,000 – ₹12,00,000 / year",
            "india.resourcing@capgemini.com",
            "https://www.capgemini.com/in-en/careers",
            "Capgemini is seeking QA Engineers to ensure the quality of software products for global banking clients.",
            &[
                "Write automated test cases",
                "Use Selenium for UI testing",
                "Report and track defects",
                "Perform API testing",
            ],
        ),
        job(
            "Node.js Developer",
            "Razorpay",
            "Bangalore",
            &["Node", "JavaScript", "MongoDB", "REST API", "AWS"],
            "₹10,00,000 – ₹20,00,000 / year",
            "careers@razorpay.com",
            "https://razorpay.com/jobs",
            "Razorpay, India's leading payments gateway, is hiring backend Node.js developers for its payments infrastructure.",
            &[
                "Build payment APIs in Node.js",
                "Design scalable backend systems",
                "Work with MongoDB",
                "Ensure 99.9% uptime",
            ],
        ),
        job(
            "Cybersecurity Analyst",
            "Cognizant",
            "Chennai",
            &["Linux", "Python", "AWS", "Docker"],
            "₹7,00,000 – ₹16,00,000 / year",
            "India.Careers@cognizant.com",
            "https://careers.cognizant.com/in/en",
            "Cognizant is hiring Cybersecurity Analysts to protect client infrastructure from modern cyber threats.",
            &[
                "Monitor network security",
                "Conduct vulnerability assessments",
                "Respond to security incidents",
                "Generate security reports",
            ],
        ),
        job(
            "Product Manager",
            "BYJU'S",
            "Bangalore",
            &["Python", "SQL", "Machine Learning", "JavaScript"],
            "₹15,00,000 – ₹30,00,000 / year",
            "careers@byjus.com",
            "https://byjus.com/careers",
            "BYJU'S, the world's largest edtech company, needs a Product Manager to drive product innovations in learning.",
            &[
                "Define product roadmap",
                "Work with engineering and design teams",
                "Analyze user data",
                "Run A/B experiments",
            ],
        ),
        job(
            "Blockchain Developer",
            "HDFC Bank Tech",
            "Pune",
            &["Python", "Solidity", "AWS", "JavaScript"],
            "₹12,00,000 – ₹25,00,000 / year",
            "careers@hdfcbank.com",
            "https://www.hdfcbank.com/careers",
            "HDFC Bank is exploring blockchain tech for banking solutions. Hiring Blockchain Developers for DeFi and payment innovations.",
            &[
                "Write Solidity smart contracts",
                "Build blockchain-based APIs",
                "Integrate with banking systems",
                "Ensure security compliance",
            ],
        ),
        job(
            "Site Reliability Engineer (SRE)",
            "Google India",
            "Hyderabad",
            &["Python", "Linux", "Kubernetes", "AWS", "Docker"],
            "₹25,00,000 – ₹50,00,000 / year",
            "india-jobs@google.com",
            "https://careers.google.com/locations/hyderabad",
            "Google India is hiring an SRE to ensure reliability, performance, and scalability of Google's critical infrastructure.",
            &[
                "Monitor production systems",
                "Automate infrastructure tasks",
                "Manage Kubernetes clusters",
                "Conduct postmortems",
            ],
        ),
        job(
            "React Native Developer",
            "PhonePe",
            "Bangalore",
            &["React", "JavaScript", "TypeScript", "Android", "iOS"],
            "₹12,00,000 – ₹22,00,000 / year",
            "careers@phonepe.com",
            "https://www.phonepe.com/en/careers.html",
            "PhonePe, India's UPI leader, is hiring a React Native Developer to build its cross-platform mobile experience.",
            &[
                "Build React Native features",
                "Optimize app performance",
                "Integrate UPI payment APIs",
                "Write tests for mobile components",
            ],
        ),
        job(
            "Solutions Architect",
            "Amazon India",
            "Bangalore",
            &["AWS", "Python", "Docker", "Kubernetes", "SQL"],
            "₹30,00,000 – ₹60,00,000 / year",
            "india-jobs@amazon.com",
            "https://www.amazon.jobs/en/locations/bangalore-india",
            "Amazon is looking for a Solutions Architect to help customers design scalable AWS cloud solutions.",
            &[
                "Design cloud architectures",
                "Lead customer workshops",
                "Write AWS CloudFormation templates",
                "Mentor junior architects",
            ],
        ),
        job(
            "ML Ops Engineer",
            "Microsoft India",
            "Hyderabad",
            &["Python", "Azure", "Docker", "Machine Learning", "SQL"],
            "₹20,00,000 – ₹40,00,000 / year",
            "msftindiahr@microsoft.com",
            "https://careers.microsoft.com/v2/global/en/locations/india.html",
            "Microsoft India needs an MLOps Engineer to operationalize and manage machine learning models at scale on Azure.",
            &[
                "Deploy ML models to Azure",
                "Build MLOps pipelines",
                "Monitor model performance",
                "Automate model retraining",
            ],
        ),
        job(
            "Database Administrator",
            "Mindtree",
            "Bangalore",
            &["MySQL", "PostgreSQL", "SQL", "Python", "Linux"],
            "₹6,00,000 – ₹14,00,000 / year",
            "careers@mindtree.com",
            "https://www.mindtree.com/careers",
            "Mindtree is hiring a DBA to manage and optimize databases for enterprise clients across banking and telecom sectors.",
            &[
                "Administer MySQL/PostgreSQL databases",
                "Write complex SQL queries",
                "Ensure high availability",
                "Backup and recovery management",
            ],
        ),
        job(
            "Embedded Systems Engineer",
            "Tata Elxsi",
            "Pune",
            &["C++", "Linux", "Python", "AWS"],
            "₹6,00,000 – ₹15,00,000 / year",
            "careers@tataelxsi.com",
            "https://www.tataelxsi.com/careers",
            "Tata Elxsi is seeking an Embedded Systems Engineer to develop firmware for automotive and IoT products.",
            &[
                "Write embedded C++ code",
                "Debug hardware-software interfaces",
                "Work with RTOS systems",
                "Test firmware on hardware",
            ],
        ),
        job(
            "Flutter Developer",
            "InMobi",
            "Bangalore",
            &["Flutter", "Dart", "iOS", "Android", "REST API"],
            "₹10,00,000 – ₹20,00,000 / year",
            "careers@inmobi.com",
            "https://www.inmobi.com/company/careers",
            "InMobi, a global mobile advertising leader, is hiring Flutter developers to power its next-gen mobile SDKs.",
            &[
                "Build cross-platform apps with Flutter",
                "Integrate ad SDKs",
                "Optimize rendering performance",
                "Write test cases",
            ],
        ),
        job(
            "Technical Lead – Java",
            "Mphasis",
            "Chennai",
            &["Java", "SpringBoot", "Kubernetes", "SQL", "AWS"],
            "₹16,00,000 – ₹30,00,000 / year",
            "careers@mphasis.com",
            "https://careers.mphasis.com",
            "Mphasis is hiring a Tech Lead to lead a team of Java developers building banking solutions for global clients.",
            &[
                "Lead Java development team",
                "Architect microservices solutions",
                "Code reviews and mentoring",
                "Coordinate with client stakeholders",
            ],
        ),
        job(
            "Salesforce Developer",
            "Persistent Systems",
            "Pune",
            &["JavaScript", "SQL", "REST API", "Python"],
            "₹8,00,000 – ₹18,00,000 / year",
            "jobs@persistent.com",
            "https://www.persistent.com/careers",
            "Persistent Systems is looking for Salesforce Developers to build CRM customizations for US-based insurance clients.",
            &[
                "Develop Salesforce Apex code",
                "Build Lightning components",
                "Integrate with third-party APIs",
                "Train business users",
            ],
        ),
        job(
            "Software Developer – Remote India",
            "Toptal India Network",
            "Remote India",
            &["Python", "JavaScript", "React", "Node", "SQL"],
            "₹18,00,000 – ₹40,00,000 / year",
            "talent@toptal.com",
            "https://www.toptal.com/talent",
            "Toptal connects India's top 3% of remote freelance developers with US and EU companies. Join the network.",
            &[
                "Deliver high-quality code remotely",
                "Work with global product teams",
                "Meet client deliverables",
                "Participate in agile sprints",
            ],
        ),
        job(
            "AI Research Engineer",
            "Samsung R&D India",
            "Bangalore",
            &["Python", "Deep Learning", "TensorFlow", "PyTorch", "C++"],
            "₹15,00,000 – ₹35,00,000 / year",
            "sri-b.recruit@samsung.com",
            "https://research.samsung.com/sri-b",
            "Samsung R&D India is hiring AI Research Engineers to push the boundaries of computer vision and NLP for Galaxy devices.",
            &[
                "Publish AI research papers",
                "Build NLP/CV prototypes",
                "Optimize models for mobile devices",
                "Collaborate with global R&D labs",
            ],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn job(
    title: &str,
    company: &str,
    location: &str,
    skills: &[&str],
    salary: &str,
    contact_email: &str,
    link: &str,
    description: &str,
    responsibilities: &[&str],
) -> JobRecord {
    JobRecord {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        salary: salary.to_string(),
        contact_email: contact_email.to_string(),
        link: link.to_string(),
        description: description.to_string(),
        responsibilities: responsibilities.iter().map(|s| s.to_string()).collect(),
    }
}
