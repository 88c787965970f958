//! Static copy shown by the gallery panels.

use serde::Serialize;

/// A team member card and its detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Employee {
    pub name: &'static str,
    pub title: &'static str,
    pub image_path: &'static str,
    pub bio: &'static str,
}

/// A card in the trailing section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoreValue {
    pub title: &'static str,
    pub text: &'static str,
}

pub static EMPLOYEES: &[Employee] = &[
    Employee {
        name: "Alex",
        title: "Frontend Developer",
        image_path: "assets/frontend-dev.jpg",
        bio: "Alex is the core architect of our interfaces, specializing in reactive UI and \
              motion design. His passion for smooth, performance-driven user experiences \
              ensures every interaction is flawless and intuitive.",
    },
    Employee {
        name: "Victoria",
        title: "HR Manager",
        image_path: "assets/hr.jpg",
        bio: "Victoria is the guardian of our corporate culture, ensuring we attract and \
              retain top talent. She manages the collective's well-being and drives our \
              diversity and inclusion initiatives.",
    },
    Employee {
        name: "Ivan",
        title: "Rust Developer",
        image_path: "assets/rust-developer.jpg",
        bio: "Ivan builds high-performance, low-latency backends using Rust. His expertise \
              in systems programming is the backbone of our 'Zero Limits' capability, \
              ensuring speed and reliability.",
    },
];

pub static CORE_VALUES: &[CoreValue] = &[
    CoreValue {
        title: "Innovation",
        text: "We constantly challenge the status quo to deliver next-generation solutions.",
    },
    CoreValue {
        title: "Precision",
        text: "Every line of code is optimized for maximum performance and reliability.",
    },
    CoreValue {
        title: "Impact",
        text: "Our focus is on creating tools that fundamentally change the way you operate.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in EMPLOYEES.iter().enumerate() {
            assert!(EMPLOYEES[i + 1..].iter().all(|b| b.name != a.name));
        }
    }
}
