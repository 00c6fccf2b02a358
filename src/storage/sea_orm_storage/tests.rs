//! 存储层集成测试（内存 SQLite）

use super::SeaOrmStorage;
use crate::errors::ClassroomError;
use crate::models::{
    PageParams,
    classes::requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
    departments::requests::{
        CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest,
    },
    enrollments::requests::{CreateEnrollmentRequest, EnrollmentListQuery},
    subjects::requests::CreateSubjectRequest,
    users::{
        entities::{MemberRole, User, UserRole},
        requests::{CreateUserRequest, UserListQuery},
    },
};
use crate::storage::Scope;

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::new_with_url(":memory:", 1, 30)
        .await
        .unwrap()
}

fn page() -> PageParams {
    PageParams { page: 1, limit: 10 }
}

async fn seed_department(s: &SeaOrmStorage, code: &str) -> i64 {
    s.create_department_impl(CreateDepartmentRequest {
        code: code.to_string(),
        name: format!("{code} 院系"),
        description: None,
    })
    .await
    .unwrap()
    .id
}

async fn seed_subject(s: &SeaOrmStorage, department_id: i64, code: &str) -> i64 {
    s.create_subject_impl(CreateSubjectRequest {
        department_id,
        name: format!("{code} 学科"),
        code: code.to_string(),
        description: None,
    })
    .await
    .unwrap()
    .id
}

async fn seed_user(s: &SeaOrmStorage, email: &str, role: UserRole) -> User {
    s.create_user_impl(CreateUserRequest {
        name: email.split('@').next().unwrap().to_string(),
        email: email.to_string(),
        role,
        department_id: None,
        image: None,
    })
    .await
    .unwrap()
}

async fn seed_class(
    s: &SeaOrmStorage,
    subject_id: i64,
    teacher_id: &str,
    capacity: Option<i32>,
) -> i64 {
    s.create_class_impl(CreateClassRequest {
        subject_id,
        teacher_id: teacher_id.to_string(),
        name: "测试班级".to_string(),
        description: None,
        capacity,
        status: None,
    })
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn test_department_crud() {
    let s = storage().await;

    let dept = s
        .create_department_impl(CreateDepartmentRequest {
            code: "CS".to_string(),
            name: "计算机学院".to_string(),
            description: Some("desc".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(dept.code, "CS");

    let fetched = s.get_department_by_id_impl(dept.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "计算机学院");

    // 时间戳为秒级，跨一秒再更新才能观察到 updated_at 前进
    std::thread::sleep(std::time::Duration::from_millis(1100));

    // 部分更新：只改名称，编码与简介保持不变
    let updated = s
        .update_department_impl(
            dept.id,
            UpdateDepartmentRequest {
                code: None,
                name: Some("软件学院".to_string()),
                description: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.code, "CS");
    assert_eq!(updated.name, "软件学院");
    assert_eq!(updated.description.as_deref(), Some("desc"));
    assert_eq!(updated.created_at, dept.created_at);
    assert!(updated.updated_at > dept.updated_at);

    // 显式 null 清空简介
    let cleared = s
        .update_department_impl(
            dept.id,
            UpdateDepartmentRequest {
                code: None,
                name: None,
                description: Some(None),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.description.is_none());

    let deleted = s.delete_department_impl(dept.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, dept.id);
    assert!(s.get_department_by_id_impl(dept.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_department_code_conflict() {
    let s = storage().await;
    seed_department(&s, "CS").await;

    let err = s
        .create_department_impl(CreateDepartmentRequest {
            code: "CS".to_string(),
            name: "重复".to_string(),
            description: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
    assert_eq!(err.message(), "Department with this code already exists");
}

#[tokio::test]
async fn test_delete_department_with_subjects_blocked() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    seed_subject(&s, dept_id, "CS101").await;

    let err = s.delete_department_impl(dept_id).await.unwrap_err();
    assert!(matches!(err, ClassroomError::ReferentialBlock(_)));
    assert_eq!(
        err.message(),
        "Cannot delete department with existing subjects or users"
    );
}

#[tokio::test]
async fn test_subject_create_requires_department() {
    let s = storage().await;

    let err = s
        .create_subject_impl(CreateSubjectRequest {
            department_id: 9999,
            name: "孤儿学科".to_string(),
            code: "X1".to_string(),
            description: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Validation(_)));
    assert_eq!(err.message(), "Department not found");
}

#[tokio::test]
async fn test_class_create_defaults() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;

    let class = s
        .create_class_impl(CreateClassRequest {
            subject_id,
            teacher_id: teacher.id.clone(),
            name: "算法基础".to_string(),
            description: None,
            capacity: None,
            status: None,
        })
        .await
        .unwrap();

    assert_eq!(class.capacity, 50);
    assert_eq!(class.invite_code.len(), 7);
    assert!(class.schedules.is_empty());
}

#[tokio::test]
async fn test_class_update_schedules() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    let class_id = seed_class(&s, subject_id, &teacher.id, None).await;

    let schedules = vec![serde_json::json!({"day": "Mon", "start": "08:00"})];
    let updated = s
        .update_class_impl(
            class_id,
            UpdateClassRequest {
                subject_id: None,
                teacher_id: None,
                name: None,
                description: None,
                capacity: Some(30),
                status: None,
                schedules: Some(schedules.clone()),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.capacity, 30);
    assert_eq!(updated.schedules, schedules);
}

#[tokio::test]
async fn test_enrollment_capacity_and_duplicate() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    let class_id = seed_class(&s, subject_id, &teacher.id, Some(1)).await;

    let s1 = seed_user(&s, "s1@example.com", UserRole::Student).await;
    let s2 = seed_user(&s, "s2@example.com", UserRole::Student).await;

    s.create_enrollment_impl(CreateEnrollmentRequest {
        student_id: s1.id.clone(),
        class_id,
    })
    .await
    .unwrap();

    // 容量已满
    let err = s
        .create_enrollment_impl(CreateEnrollmentRequest {
            student_id: s2.id.clone(),
            class_id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::CapacityExceeded(_)));
    assert_eq!(err.message(), "Class is full");

    // 重复选课
    let roomy = seed_class(&s, subject_id, &teacher.id, Some(10)).await;
    s.create_enrollment_impl(CreateEnrollmentRequest {
        student_id: s1.id.clone(),
        class_id: roomy,
    })
    .await
    .unwrap();
    let err = s
        .create_enrollment_impl(CreateEnrollmentRequest {
            student_id: s1.id.clone(),
            class_id: roomy,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
    assert_eq!(err.message(), "Student already enrolled in this class");
}

#[tokio::test]
async fn test_enrollment_negative_capacity_rejected() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    let class_id = seed_class(&s, subject_id, &teacher.id, Some(-1)).await;
    let student = seed_user(&s, "s1@example.com", UserRole::Student).await;

    // 负容量按有符号比较视为满员，第一条选课就该被拒绝
    let err = s
        .create_enrollment_impl(CreateEnrollmentRequest {
            student_id: student.id,
            class_id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::CapacityExceeded(_)));
    assert_eq!(err.message(), "Class is full");
}

#[tokio::test]
async fn test_enrollment_missing_class() {
    let s = storage().await;
    let student = seed_user(&s, "s1@example.com", UserRole::Student).await;

    let err = s
        .create_enrollment_impl(CreateEnrollmentRequest {
            student_id: student.id,
            class_id: 424242,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::NotFound(_)));
    assert_eq!(err.message(), "Class not found");
}

#[tokio::test]
async fn test_class_members_missing_class_is_none() {
    let s = storage().await;
    let result = s.list_class_members_impl(424242, page()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_class_members_listing() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    let class_id = seed_class(&s, subject_id, &teacher.id, None).await;
    let student = seed_user(&s, "s1@example.com", UserRole::Student).await;

    s.create_enrollment_impl(CreateEnrollmentRequest {
        student_id: student.id.clone(),
        class_id,
    })
    .await
    .unwrap();

    let members = s
        .list_class_members_impl(class_id, page())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(members.data.len(), 1);
    assert_eq!(members.data[0].id, student.id);
}

#[tokio::test]
async fn test_scope_member_resolution() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    let class_id = seed_class(&s, subject_id, &teacher.id, None).await;
    let student = seed_user(&s, "s1@example.com", UserRole::Student).await;
    s.create_enrollment_impl(CreateEnrollmentRequest {
        student_id: student.id.clone(),
        class_id,
    })
    .await
    .unwrap();

    // 归属口径按用户的院系字段匹配
    let affiliated = s
        .create_user_impl(CreateUserRequest {
            name: "staff".to_string(),
            email: "staff@example.com".to_string(),
            role: UserRole::Admin,
            department_id: Some(dept_id),
            image: None,
        })
        .await
        .unwrap();

    let members = s
        .list_scope_members_impl(Scope::Department(dept_id), MemberRole::Unscoped, page())
        .await
        .unwrap();
    assert_eq!(members.data.len(), 1);
    assert_eq!(members.data[0].id, affiliated.id);

    let teachers = s
        .list_scope_members_impl(Scope::Department(dept_id), MemberRole::Teacher, page())
        .await
        .unwrap();
    assert_eq!(teachers.data.len(), 1);
    assert_eq!(teachers.data[0].id, teacher.id);

    let students = s
        .list_scope_members_impl(Scope::Department(dept_id), MemberRole::Student, page())
        .await
        .unwrap();
    assert_eq!(students.data.len(), 1);
    assert_eq!(students.data[0].id, student.id);

    // 课程范围未指定角色时按学生口径
    let subject_members = s
        .list_scope_members_impl(Scope::Subject(subject_id), MemberRole::Unscoped, page())
        .await
        .unwrap();
    assert_eq!(subject_members.data.len(), 1);
    assert_eq!(subject_members.data[0].id, student.id);
}

#[tokio::test]
async fn test_user_email_conflict_and_unknown_role_filter() {
    let s = storage().await;
    seed_user(&s, "dup@example.com", UserRole::Student).await;

    let err = s
        .create_user_impl(CreateUserRequest {
            name: "again".to_string(),
            email: "dup@example.com".to_string(),
            role: UserRole::Student,
            department_id: None,
            image: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClassroomError::Conflict(_)));
    assert_eq!(err.message(), "User with this email already exists");

    // 未知角色原样下推，匹配不到任何行
    let listed = s
        .list_users_impl(UserListQuery {
            page: page(),
            search: None,
            role: Some("wizard".to_string()),
        })
        .await
        .unwrap();
    assert!(listed.data.is_empty());
    assert_eq!(listed.pagination.total, 0);
}

#[tokio::test]
async fn test_delete_teaching_user_blocked() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    seed_class(&s, subject_id, &teacher.id, None).await;

    let err = s.delete_user_impl(&teacher.id).await.unwrap_err();
    assert!(matches!(err, ClassroomError::ReferentialBlock(_)));
    assert_eq!(err.message(), "Cannot delete user who teaches classes");
}

#[tokio::test]
async fn test_pagination_math() {
    let s = storage().await;
    for code in ["A1", "A2", "A3"] {
        seed_department(&s, code).await;
    }

    let first = s
        .list_departments_impl(DepartmentListQuery {
            page: PageParams { page: 1, limit: 2 },
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.pagination.total, 3);
    assert_eq!(first.pagination.total_pages, 2);

    // 超出范围的页返回空数据，总数不变
    let beyond = s
        .list_departments_impl(DepartmentListQuery {
            page: PageParams { page: 5, limit: 2 },
            search: None,
        })
        .await
        .unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.pagination.total, 3);
}

#[tokio::test]
async fn test_search_filters() {
    let s = storage().await;
    let cs = seed_department(&s, "CS").await;
    seed_department(&s, "MATH").await;

    let hits = s
        .list_departments_impl(DepartmentListQuery {
            page: page(),
            search: Some("CS".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(hits.data.len(), 1);
    assert_eq!(hits.data[0].id, cs);

    // 班级按学科 ID 筛选
    let subject_id = seed_subject(&s, cs, "CS101").await;
    let other_subject = seed_subject(&s, cs, "CS102").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    let class_id = seed_class(&s, subject_id, &teacher.id, None).await;
    seed_class(&s, other_subject, &teacher.id, None).await;

    let classes = s
        .list_classes_impl(ClassListQuery {
            page: page(),
            search: None,
            subject_id: Some(subject_id),
            teacher_id: None,
        })
        .await
        .unwrap();
    assert_eq!(classes.data.len(), 1);
    assert_eq!(classes.data[0].class.id, class_id);
}

#[tokio::test]
async fn test_session_lookup() {
    use crate::entity::sessions;
    use sea_orm::{ActiveModelTrait, Set};

    let s = storage().await;
    let user = seed_user(&s, "s1@example.com", UserRole::Student).await;
    let now = chrono::Utc::now().timestamp();

    sessions::ActiveModel {
        token: Set("valid-token".to_string()),
        user_id: Set(user.id.clone()),
        expires_at: Set(now + 3600),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&s.db)
    .await
    .unwrap();

    sessions::ActiveModel {
        token: Set("expired-token".to_string()),
        user_id: Set(user.id.clone()),
        expires_at: Set(now - 3600),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&s.db)
    .await
    .unwrap();

    let found = s.find_session_user_impl("valid-token").await.unwrap();
    assert_eq!(found.unwrap().id, user.id);

    assert!(s.find_session_user_impl("expired-token").await.unwrap().is_none());
    assert!(s.find_session_user_impl("no-such-token").await.unwrap().is_none());
}

#[tokio::test]
async fn test_department_totals_and_stats() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    let class_a = seed_class(&s, subject_id, &teacher.id, None).await;
    let class_b = seed_class(&s, subject_id, &teacher.id, None).await;
    let student = seed_user(&s, "s1@example.com", UserRole::Student).await;

    // 同一学生选两个班级，去重后只算一人
    for class_id in [class_a, class_b] {
        s.create_enrollment_impl(CreateEnrollmentRequest {
            student_id: student.id.clone(),
            class_id,
        })
        .await
        .unwrap();
    }

    let totals = s.get_department_totals_impl(dept_id).await.unwrap();
    assert_eq!(totals.subjects, 1);
    assert_eq!(totals.classes, 2);
    assert_eq!(totals.enrolled_students, 1);

    let stats = s.get_dashboard_stats_impl().await.unwrap();
    assert_eq!(stats.metrics.total_students, 1);
    assert_eq!(stats.metrics.total_teachers, 1);
    assert_eq!(stats.metrics.total_classes, 2);
    assert_eq!(stats.metrics.total_enrollments, 2);
    assert_eq!(stats.capacity_status.len(), 2);

    // 两条选课发生在同一天，趋势只有一个桶
    assert_eq!(stats.enrollment_trends.len(), 1);
    assert_eq!(stats.enrollment_trends[0].count, 2);
    assert_eq!(stats.enrollment_trends[0].date.len(), 10);
    assert!(
        stats
            .classes_by_dept
            .iter()
            .any(|d| d.department_name == "CS 院系" && d.count == 2)
    );
}

#[tokio::test]
async fn test_enrollment_listing_by_class() {
    let s = storage().await;
    let dept_id = seed_department(&s, "CS").await;
    let subject_id = seed_subject(&s, dept_id, "CS101").await;
    let teacher = seed_user(&s, "teacher@example.com", UserRole::Teacher).await;
    let class_a = seed_class(&s, subject_id, &teacher.id, None).await;
    let class_b = seed_class(&s, subject_id, &teacher.id, None).await;
    let student = seed_user(&s, "s1@example.com", UserRole::Student).await;

    for class_id in [class_a, class_b] {
        s.create_enrollment_impl(CreateEnrollmentRequest {
            student_id: student.id.clone(),
            class_id,
        })
        .await
        .unwrap();
    }

    let listed = s
        .list_enrollments_impl(EnrollmentListQuery {
            page: PageParams {
                page: 1,
                limit: 100,
            },
            class_id: Some(class_a),
        })
        .await
        .unwrap();
    assert_eq!(listed.data.len(), 1);
    assert_eq!(listed.data[0].enrollment.class_id, class_a);
    assert_eq!(
        listed.data[0].student.as_ref().unwrap().id,
        student.id
    );
}
