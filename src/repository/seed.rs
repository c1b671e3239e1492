//! Demo seed data loaded at every process start

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{
    BorrowRequest, Equipment, EquipmentCategory, EquipmentCondition, RequestStatus, Role, User,
};

use super::Database;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn user(db: &mut Database, name: &str, email: &str, role: Role, school_id: &str) -> i32 {
    let id = db.next_user_id();
    db.users.insert(
        id,
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            school_id: school_id.to_string(),
        },
    );
    id
}

#[allow(clippy::too_many_arguments)]
fn equipment(
    db: &mut Database,
    name: &str,
    category: EquipmentCategory,
    condition: EquipmentCondition,
    quantity: u32,
    available: u32,
    image: &str,
    description: &str,
) -> i32 {
    let id = db.next_equipment_id();
    db.equipment.insert(
        id,
        Equipment {
            id,
            name: name.to_string(),
            category,
            condition,
            quantity,
            available,
            image: Some(image.to_string()),
            description: Some(description.to_string()),
        },
    );
    id
}

#[allow(clippy::too_many_arguments)]
fn request(
    db: &mut Database,
    equipment_id: i32,
    user_id: i32,
    request_date: NaiveDate,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
    pickup_location: &str,
    status: RequestStatus,
    approved_by: Option<i32>,
) -> i32 {
    let id = db.next_request_id();
    db.requests.insert(
        id,
        BorrowRequest {
            id,
            equipment_id,
            user_id,
            request_date: Utc
                .from_utc_datetime(&request_date.and_hms_opt(9, 0, 0).unwrap_or_default()),
            start_date,
            end_date,
            reason: reason.to_string(),
            pickup_location: pickup_location.to_string(),
            status,
            approved_by,
            notes: None,
            return_date: None,
            return_condition: None,
            fine: None,
        },
    );
    id
}

/// Fill the database with the demo school catalog: six users across the
/// three roles, ten equipment items, and requests covering every lifecycle
/// state. Availability figures include the units held by the seeded
/// active requests.
pub fn populate(db: &mut Database) {
    let emma = user(db, "Emma Thompson", "emma.thompson@school.edu", Role::Student, "STU-2024-001");
    let michael = user(db, "Michael Chen", "michael.chen@school.edu", Role::Student, "STU-2024-002");
    let sarah = user(db, "Sarah Williams", "sarah.williams@school.edu", Role::Staff, "STF-2024-001");
    let david = user(db, "David Martinez", "david.martinez@school.edu", Role::Staff, "STF-2024-002");
    let patricia = user(db, "Dr. Patricia Johnson", "patricia.johnson@school.edu", Role::Admin, "ADM-2024-001");
    user(db, "Dr. Robert Lee", "robert.lee@school.edu", Role::Admin, "ADM-2024-002");

    let camera = equipment(
        db,
        "Digital Camera Canon EOS",
        EquipmentCategory::Camera,
        EquipmentCondition::Excellent,
        5,
        3,
        "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=400",
        "Professional DSLR camera with 24MP sensor and 4K video recording",
    );
    let microscope = equipment(
        db,
        "Compound Microscope",
        EquipmentCategory::Lab,
        EquipmentCondition::Good,
        10,
        7,
        "https://images.unsplash.com/photo-1582560475093-ba66accbc424?w=400",
        "High-power optical microscope with 1000x magnification",
    );
    equipment(
        db,
        "Football Set",
        EquipmentCategory::Sports,
        EquipmentCondition::Good,
        8,
        8,
        "https://images.unsplash.com/photo-1552318965-6e6be7484ada?w=400",
        "Professional size 5 football with pump and carrying bag",
    );
    let guitar = equipment(
        db,
        "Acoustic Guitar",
        EquipmentCategory::Music,
        EquipmentCondition::Excellent,
        4,
        2,
        "https://images.unsplash.com/photo-1510915361894-db8b60106cb1?w=400",
        "Yamaha acoustic guitar with case and tuner",
    );
    let projector = equipment(
        db,
        "Projector & Screen",
        EquipmentCategory::Av,
        EquipmentCondition::Excellent,
        6,
        4,
        "https://images.unsplash.com/photo-1593508512255-86ab42a8e620?w=400",
        "4K projector with portable screen and HDMI cables",
    );
    equipment(
        db,
        "Laboratory Beaker Set",
        EquipmentCategory::Lab,
        EquipmentCondition::Good,
        15,
        12,
        "https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?w=400",
        "Complete glass beaker set with various sizes from 50ml to 1000ml",
    );
    equipment(
        db,
        "Basketball",
        EquipmentCategory::Sports,
        EquipmentCondition::Good,
        12,
        9,
        "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=400",
        "Official size 7 basketball with inflation pump",
    );
    let piano = equipment(
        db,
        "Digital Piano Keyboard",
        EquipmentCategory::Music,
        EquipmentCondition::Excellent,
        3,
        1,
        "https://images.unsplash.com/photo-1520523839897-bd0b52f945a0?w=400",
        "88-key digital piano with weighted keys and sustain pedal",
    );
    let video_camera = equipment(
        db,
        "Video Camera & Tripod",
        EquipmentCategory::Camera,
        EquipmentCondition::Good,
        4,
        2,
        "https://images.unsplash.com/photo-1492619375914-88005aa9e8fb?w=400",
        "4K video camera with stabilization and professional tripod",
    );
    equipment(
        db,
        "Wireless Microphone Set",
        EquipmentCategory::Av,
        EquipmentCondition::Excellent,
        8,
        6,
        "https://images.unsplash.com/photo-1590602847861-f357a9332bbc?w=400",
        "Professional wireless mic system with receiver and two handhelds",
    );

    request(
        db,
        camera,
        emma,
        date(2025, 10, 20),
        date(2025, 10, 25),
        date(2025, 11, 1),
        "Photography project for Art class",
        "Equipment Room A",
        RequestStatus::Approved,
        Some(patricia),
    );
    request(
        db,
        microscope,
        michael,
        date(2025, 10, 22),
        date(2025, 10, 28),
        date(2025, 11, 5),
        "Biology lab experiment",
        "Science Lab",
        RequestStatus::Pending,
        None,
    );
    let returned = request(
        db,
        guitar,
        emma,
        date(2025, 10, 15),
        date(2025, 10, 18),
        date(2025, 10, 25),
        "Music recital practice",
        "Music Room",
        RequestStatus::Returned,
        Some(sarah),
    );
    if let Some(r) = db.requests.get_mut(&returned) {
        r.return_date = Some(
            Utc.from_utc_datetime(&date(2025, 10, 26).and_hms_opt(9, 0, 0).unwrap_or_default()),
        );
        r.return_condition = Some(EquipmentCondition::Good);
        r.fine = Some(rust_decimal_macros::dec!(2.00));
    }
    // Past its end date, so it reads as Overdue through the derived view
    request(
        db,
        piano,
        michael,
        date(2025, 10, 10),
        date(2025, 10, 15),
        date(2025, 10, 22),
        "Piano practice for concert",
        "Music Room",
        RequestStatus::Issued,
        Some(sarah),
    );
    request(
        db,
        projector,
        emma,
        date(2025, 10, 28),
        date(2025, 11, 2),
        date(2025, 11, 4),
        "Class presentation",
        "Equipment Room B",
        RequestStatus::Issued,
        Some(david),
    );
    request(
        db,
        video_camera,
        michael,
        date(2025, 10, 27),
        date(2025, 11, 1),
        date(2025, 11, 8),
        "Video documentary project",
        "Equipment Room A",
        RequestStatus::Waitlist,
        None,
    );
}
