use chrono::NaiveDate;
use crate::models::employee::Employee;

fn seed(
    id: i64,
    first_name: &str,
    last_name: &str,
    department: &str,
    role: &str,
    (year, month, day): (i32, u32, u32),
    photo: u32,
) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}.{}@company.com", first_name.to_lowercase(), last_name.to_lowercase()),
        department: department.to_string(),
        role: role.to_string(),
        date_of_joining: NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid"),
        profile_picture: Some(format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"
        )),
    }
}

/// The collection every directory starts from.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        seed(1, "John", "Doe", "Engineering", "Senior Developer", (2022, 1, 15), 2379004),
        seed(2, "Jane", "Smith", "Marketing", "Marketing Manager", (2021, 8, 22), 774909),
        seed(3, "Michael", "Johnson", "Human Resources", "HR Specialist", (2023, 3, 10), 1222271),
        seed(4, "Emily", "Davis", "Finance", "Financial Analyst", (2022, 11, 5), 1239291),
        seed(5, "David", "Wilson", "Engineering", "Frontend Developer", (2023, 1, 20), 1681010),
        seed(6, "Sarah", "Brown", "Design", "UX Designer", (2022, 6, 18), 1130626),
        seed(7, "Robert", "Taylor", "Engineering", "DevOps Engineer", (2021, 12, 3), 1043471),
        seed(8, "Lisa", "Anderson", "Marketing", "Content Creator", (2023, 4, 12), 1036623),
        seed(9, "Chris", "Martinez", "Sales", "Sales Representative", (2022, 9, 14), 1212984),
        seed(10, "Amanda", "Garcia", "Human Resources", "Recruiter", (2023, 2, 28), 1181686),
        seed(11, "James", "Rodriguez", "Engineering", "Backend Developer", (2021, 10, 7), 1300402),
        seed(12, "Jessica", "Lee", "Design", "Graphic Designer", (2022, 4, 25), 1065084),
        seed(13, "Mark", "Thompson", "Operations", "Operations Manager", (2021, 7, 11), 1040880),
        seed(14, "Ashley", "White", "Finance", "Accountant", (2023, 5, 16), 1542085),
        seed(15, "Kevin", "Harris", "Engineering", "Full Stack Developer", (2022, 12, 1), 1559486),
        seed(16, "Nicole", "Clark", "Marketing", "Digital Marketing Specialist", (2023, 1, 8), 1858175),
        seed(17, "Ryan", "Lewis", "Sales", "Sales Manager", (2021, 11, 30), 1516680),
        seed(18, "Stephanie", "Walker", "Design", "UI Designer", (2022, 8, 14), 1674752),
        seed(19, "Andrew", "Hall", "Engineering", "Data Scientist", (2023, 3, 22), 1438081),
        seed(20, "Melissa", "Young", "Operations", "Project Manager", (2022, 2, 17), 1181424),
        seed(21, "Brian", "King", "Engineering", "Mobile Developer", (2021, 9, 5), 1484794),
        seed(22, "Lauren", "Wright", "Human Resources", "HR Manager", (2020, 12, 10), 1587009),
        seed(23, "Tyler", "Lopez", "Finance", "Finance Manager", (2021, 5, 18), 1043474),
        seed(24, "Rachel", "Hill", "Marketing", "Brand Manager", (2022, 10, 3), 1102341),
    ]
}
