#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub first_name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub date_of_joining: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    FirstName,
    LastName,
    Department,
    Role,
    DateOfJoining,
}

impl SortOption {
    /// Unrecognised names yield `None`, which leaves the input order untouched.
    pub fn parse(name: &str) -> Option<SortOption> {
        match name {
            "firstName" => Some(SortOption::FirstName),
            "lastName" => Some(SortOption::LastName),
            "department" => Some(SortOption::Department),
            "role" => Some(SortOption::Role),
            "dateOfJoining" => Some(SortOption::DateOfJoining),
            _ => None,
        }
    }
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::FirstName
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsPerPage {
    Twelve,
    TwentyFour,
    FortyEight,
    NinetySix,
}

impl ItemsPerPage {
    pub const CHOICES: [usize; 4] = [12, 24, 48, 96];

    pub fn from_count(count: usize) -> Option<ItemsPerPage> {
        match count {
            12 => Some(ItemsPerPage::Twelve),
            24 => Some(ItemsPerPage::TwentyFour),
            48 => Some(ItemsPerPage::FortyEight),
            96 => Some(ItemsPerPage::NinetySix),
            _ => None,
        }
    }

    pub fn get(self) -> usize {
        match self {
            ItemsPerPage::Twelve => 12,
            ItemsPerPage::TwentyFour => 24,
            ItemsPerPage::FortyEight => 48,
            ItemsPerPage::NinetySix => 96,
        }
    }
}

impl Default for ItemsPerPage {
    fn default() -> Self {
        ItemsPerPage::Twelve
    }
}
