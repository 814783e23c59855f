use cool_asserts::assert_matches;
use crewplan_db_migrator::CREWPLAN_DB_MIGRATIONS;
use models_planning::draft::{DraftScope, DraftStatus};
use models_planning::shift::NewShift;
use models_planning::tenant::TenantContext;
use models_planning::week::WeekKey;
use sqlx::SqlitePool;

use crate::domain::model::{BuildBoardError, CreateShiftError, ResolveContextError};
use crate::domain::planner_service::{PlannerService, PlannerServiceImpl};
use crate::outbound::draft_repo::DraftRepositoryImpl;
use crate::outbound::mock::{MockDraftRepository, MockShiftRepository};
use crate::outbound::shift_repo::ShiftRepositoryImpl;

fn service(pool: SqlitePool) -> PlannerServiceImpl<ShiftRepositoryImpl, DraftRepositoryImpl> {
    PlannerServiceImpl::new(
        pool.clone(),
        ShiftRepositoryImpl::new(pool.clone()),
        DraftRepositoryImpl::new(pool),
    )
}

fn mocked(
    pool: SqlitePool,
    shifts: MockShiftRepository,
) -> PlannerServiceImpl<MockShiftRepository, MockDraftRepository> {
    PlannerServiceImpl::new(pool, shifts, MockDraftRepository::new())
}

fn harbour() -> TenantContext {
    TenantContext {
        tenant_id: "tenant-harbour".to_string(),
        user_id: "user-anna".to_string(),
    }
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_resolve_context_requires_a_session(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    assert_matches!(
        service.resolve_context(None).await,
        Err(ResolveContextError::NoSession)
    );
    assert_matches!(
        service.resolve_context(Some("   ")).await,
        Err(ResolveContextError::NoSession)
    );

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_resolve_context_requires_a_membership(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    assert_matches!(
        service.resolve_context(Some("user-drifter")).await,
        Err(ResolveContextError::NoTenantMembership)
    );

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_resolve_context_finds_the_membership(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    let ctx = service.resolve_context(Some("  user-anna  ")).await?;
    assert_eq!(ctx.tenant_id, "tenant-harbour");
    assert_eq!(ctx.user_id, "user-anna");

    let ctx = service.resolve_context(Some("user-mette")).await?;
    assert_eq!(ctx.tenant_id, "tenant-north");

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_board_assembles_week_roster_and_shifts(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    let board = service
        .build_board(&harbour(), "loc-cafe", "plan-summer", Some("2024-W33"))
        .await?;

    assert_eq!(board.week_key, "2024-W33");
    assert_eq!(board.days.len(), 7);
    assert_eq!(board.days[0].weekday, "Monday");
    assert_eq!(board.days[0].date, "2024-08-12");
    assert_eq!(board.days[6].date, "2024-08-18");
    assert!(board.days[2].closed, "template closes Wednesdays");
    assert!(board.days[6].closed, "template closes Sundays");

    // Widest open span across the template, Tuesday runs to 20:00.
    assert_eq!(board.open_hours.start_hour, 8.0);
    assert_eq!(board.open_hours.end_hour, 20.0);

    // Bar has nobody at the cafe and drops out of the grouping.
    let names: Vec<&str> = board
        .departments
        .iter()
        .map(|group| group.name.as_str())
        .collect();
    assert_eq!(names, ["Kitchen", "Service"]);

    let kitchen = &board.departments[0];
    let row_ids: Vec<&str> = kitchen
        .rows
        .iter()
        .map(|row| row.employee_id.as_str())
        .collect();
    assert_eq!(row_ids, ["emp-ida", "emp-lars"]);

    let ida = &kitchen.rows[0];
    assert_eq!(ida.hours.worked_hours, 14.0);
    assert_eq!(ida.hours.contracted_hours, 37.0);
    assert_eq!(ida.cells[0].shifts.len(), 1);
    assert_eq!(ida.cells[0].shifts[0].id, "shift-mon-ida");
    assert!(ida.cells[2].closed);
    assert!(ida.cells[2].shifts.is_empty(), "closed cells hide their shifts");

    let lars = &kitchen.rows[1];
    assert_eq!(lars.hours.worked_hours, 8.0);
    assert_eq!(lars.hours.contracted_hours, 20.0);

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_board_requires_a_known_template(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    assert_matches!(
        service
            .build_board(&harbour(), "loc-cafe", "plan-missing", Some("2024-W33"))
            .await,
        Err(BuildBoardError::TemplateDoesNotExist)
    );

    // Another tenant's template does not exist from here either.
    let north = TenantContext {
        tenant_id: "tenant-north".to_string(),
        user_id: "user-mette".to_string(),
    };
    assert_matches!(
        service
            .build_board(&north, "loc-mall", "plan-summer", Some("2024-W33"))
            .await,
        Err(BuildBoardError::TemplateDoesNotExist)
    );

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_board_survives_a_garbled_template_schedule(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    // plan-winter carries an unreadable schedule; the board still renders,
    // every day closed, bounds at their defaults.
    let board = service
        .build_board(&harbour(), "loc-cafe", "plan-winter", Some("2024-W33"))
        .await?;

    assert_eq!(board.days.len(), 7);
    assert!(board.days.iter().all(|day| day.closed));
    assert_eq!(board.open_hours.start_hour, 8.0);
    assert_eq!(board.open_hours.end_hour, 18.0);

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_board_resolves_a_blank_week_to_the_sentinel(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);

    let board = service
        .build_board(&harbour(), "loc-cafe", "plan-summer", None)
        .await?;

    assert_eq!(board.week_key, "no-week");
    assert_eq!(board.days.len(), 7);
    assert_eq!(board.days[0].weekday, "Monday");

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_board_renders_empty_when_the_shift_read_fails(pool: SqlitePool) -> anyhow::Result<()> {
    let service = mocked(pool, MockShiftRepository::failing_reads());
    let ctx = harbour();

    assert!(service.shifts_for_plan(&ctx, "plan-summer").await.is_empty());
    assert!(service.shifts_for_draft(&ctx, "draft-w33").await.is_empty());

    let board = service
        .build_board(&ctx, "loc-cafe", "plan-summer", Some("2024-W33"))
        .await?;
    let kitchen = &board.departments[0];
    assert_eq!(kitchen.rows[0].hours.worked_hours, 0.0);
    assert!(kitchen.rows[0].cells.iter().all(|cell| cell.shifts.is_empty()));

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_shift_writes_surface_their_errors(pool: SqlitePool) -> anyhow::Result<()> {
    // Writes never degrade the way reads do.
    let service = mocked(pool, MockShiftRepository::failing_reads());

    let shift = NewShift {
        location_id: "loc-cafe".to_string(),
        planning_id: "plan-summer".to_string(),
        draft_id: None,
        employee_id: "".to_string(),
        department_id: None,
        work_date: "2024-08-15".to_string(),
        start_time: "09:00".to_string(),
        end_time: "14:00".to_string(),
        break_minutes: None,
        notes: None,
    };
    assert_matches!(
        service.create_shift(&harbour(), shift).await,
        Err(CreateShiftError::MissingField("employee_id"))
    );

    Ok(())
}

#[sqlx::test(
    migrator = "CREWPLAN_DB_MIGRATIONS",
    fixtures(path = "../../../fixtures", scripts("tenants", "roster", "planning"))
)]
async fn test_draft_lifecycle_runs_through_the_service(pool: SqlitePool) -> anyhow::Result<()> {
    let service = service(pool);
    let ctx = harbour();
    let scope = DraftScope {
        location_id: "loc-cafe".to_string(),
        planning_id: "plan-summer".to_string(),
        week_key: WeekKey::resolve(Some("2024-W40")),
    };

    let saved = service.save_draft(&ctx, scope.clone(), None).await?;
    assert_eq!(saved.status, DraftStatus::Draft);

    let current = service.current_draft(&ctx, &scope).await?;
    assert_eq!(current.map(|draft| draft.id), Some(saved.id.clone()));

    let published = service
        .publish_draft(&ctx, scope.clone(), Some(&saved.id))
        .await?;
    assert_eq!(published.id, saved.id);
    assert_eq!(published.status, DraftStatus::Published);
    assert_eq!(
        service.list_published(&ctx).await?.first().map(|draft| draft.id.clone()),
        Some(saved.id.clone())
    );

    assert!(service.delete_draft(&ctx, &saved.id).await?);
    assert!(service.current_draft(&ctx, &scope).await?.is_none());
    assert!(!service.delete_draft(&ctx, &saved.id).await?);

    Ok(())
}
