use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Engineering,
    Marketing,
    Design,
    Finance,
    HumanResources,
    Sales,
    Operations,
}

/// Gradient used for departments outside the known set.
pub const FALLBACK_COLOR: &str = "from-gray-500 to-slate-500";

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Engineering,
        Department::Marketing,
        Department::Design,
        Department::Finance,
        Department::HumanResources,
        Department::Sales,
        Department::Operations,
    ];

    pub fn from_name(name: &str) -> Option<Department> {
        Department::ALL.into_iter().find(|dept| dept.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Design => "Design",
            Department::Finance => "Finance",
            Department::HumanResources => "Human Resources",
            Department::Sales => "Sales",
            Department::Operations => "Operations",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Department::Engineering => "from-blue-500 to-cyan-500",
            Department::Marketing => "from-green-500 to-emerald-500",
            Department::Design => "from-purple-500 to-pink-500",
            Department::Finance => "from-yellow-500 to-orange-500",
            Department::HumanResources => "from-pink-500 to-rose-500",
            Department::Sales => "from-indigo-500 to-blue-500",
            Department::Operations => "from-red-500 to-pink-500",
        }
    }

    pub fn roles(self) -> &'static [&'static str] {
        match self {
            Department::Engineering => &[
                "Senior Developer",
                "Frontend Developer",
                "Backend Developer",
                "Full Stack Developer",
                "DevOps Engineer",
                "Data Scientist",
                "Mobile Developer",
                "Software Architect",
                "Tech Lead",
            ],
            Department::Marketing => &[
                "Marketing Manager",
                "Content Creator",
                "Digital Marketing Specialist",
                "Brand Manager",
                "SEO Specialist",
                "Social Media Manager",
                "Marketing Analyst",
            ],
            Department::Design => &[
                "UX Designer",
                "UI Designer",
                "Graphic Designer",
                "Product Designer",
                "Creative Director",
                "Visual Designer",
            ],
            Department::Finance => &[
                "Financial Analyst",
                "Accountant",
                "Finance Manager",
                "Budget Analyst",
                "Financial Controller",
                "Investment Analyst",
            ],
            Department::HumanResources => &[
                "HR Specialist",
                "Recruiter",
                "HR Manager",
                "Training Coordinator",
                "Compensation Analyst",
                "Employee Relations Specialist",
            ],
            Department::Sales => &[
                "Sales Representative",
                "Sales Manager",
                "Account Executive",
                "Business Development Manager",
                "Sales Director",
                "Customer Success Manager",
            ],
            Department::Operations => &[
                "Operations Manager",
                "Project Manager",
                "Process Analyst",
                "Operations Director",
                "Supply Chain Manager",
                "Quality Assurance Manager",
            ],
        }
    }
}

/// Color for any department name, known or not.
pub fn department_color(name: &str) -> &'static str {
    Department::from_name(name)
        .map(Department::color)
        .unwrap_or(FALLBACK_COLOR)
}

#[derive(Serialize, Debug)]
pub struct DepartmentInfo {
    pub name: &'static str,
    pub color: &'static str,
    pub roles: &'static [&'static str],
}

impl From<Department> for DepartmentInfo {
    fn from(dept: Department) -> Self {
        DepartmentInfo {
            name: dept.name(),
            color: dept.color(),
            roles: dept.roles(),
        }
    }
}
