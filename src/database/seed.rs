use super::directory::Directory;
use crate::models::ActivityRecord;

// name, description, schedule, max_participants, participants
const SEED_ACTIVITIES: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball team for school tournaments",
        "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        15,
        &["alex@mergington.edu", "sarah@mergington.edu"],
    ),
    (
        "Track and Field",
        "Running, jumping, and throwing events training",
        "Mondays and Wednesdays, 3:00 PM - 5:00 PM",
        25,
        &["ryan@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Painting, drawing, and sculpture workshops",
        "Wednesdays, 3:30 PM - 5:30 PM",
        16,
        &["lucy@mergington.edu", "david@mergington.edu"],
    ),
    (
        "Drama Club",
        "Acting, theater production, and performance arts",
        "Tuesdays and Fridays, 3:00 PM - 5:00 PM",
        18,
        &["zoe@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Competitive science and engineering problem solving",
        "Thursdays, 3:30 PM - 5:30 PM",
        14,
        &["anna@mergington.edu", "jacob@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Mondays and Fridays, 3:30 PM - 4:30 PM",
        10,
        &["grace@mergington.edu", "noah@mergington.edu"],
    ),
];

/// The hardcoded roster the server starts with.
pub fn seed_directory() -> Directory {
    Directory::from_entries(SEED_ACTIVITIES.iter().map(
        |&(name, description, schedule, max_participants, participants)| {
            (
                name,
                ActivityRecord::new(
                    description,
                    schedule,
                    max_participants,
                    participants.iter().copied(),
                ),
            )
        },
    ))
}
