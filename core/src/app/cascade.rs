//! Cascade deletion of a course and everything that references it

use std::sync::Arc;

use crate::domain::entities::{CascadeDeletionQuery, CourseId};
use crate::domain::ports::{
    CourseStore, DeadlineExtensionsGateway, FeedbackSessionsGateway, InstructorsGateway,
    QuestionsGateway, ResponseCommentsGateway, ResponsesGateway, StudentsGateway,
};
use crate::error::AppError;

/// Coordinates the ordered removal of a course and its dependent records
pub struct CascadeService<S, RC, FR, FQ, FS, ST, IN, DE>
where
    S: CourseStore,
    RC: ResponseCommentsGateway,
    FR: ResponsesGateway,
    FQ: QuestionsGateway,
    FS: FeedbackSessionsGateway,
    ST: StudentsGateway,
    IN: InstructorsGateway,
    DE: DeadlineExtensionsGateway,
{
    store: Arc<S>,
    response_comments: Arc<RC>,
    responses: Arc<FR>,
    questions: Arc<FQ>,
    sessions: Arc<FS>,
    students: Arc<ST>,
    instructors: Arc<IN>,
    deadline_extensions: Arc<DE>,
}

impl<S, RC, FR, FQ, FS, ST, IN, DE> CascadeService<S, RC, FR, FQ, FS, ST, IN, DE>
where
    S: CourseStore,
    RC: ResponseCommentsGateway,
    FR: ResponsesGateway,
    FQ: QuestionsGateway,
    FS: FeedbackSessionsGateway,
    ST: StudentsGateway,
    IN: InstructorsGateway,
    DE: DeadlineExtensionsGateway,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<S>,
        response_comments: Arc<RC>,
        responses: Arc<FR>,
        questions: Arc<FQ>,
        sessions: Arc<FS>,
        students: Arc<ST>,
        instructors: Arc<IN>,
        deadline_extensions: Arc<DE>,
    ) -> Self {
        Self {
            store,
            response_comments,
            responses,
            questions,
            sessions,
            students,
            instructors,
            deadline_extensions,
        }
    }

    /// Deletes a course and cascades to its comments, responses, questions,
    /// sessions, students, instructors and deadline extensions.
    ///
    /// Fails silently if no such course. The dependent deletes run strictly
    /// in order: responses must be gone before the questions they answer,
    /// and so on down the chain. A failure part-way through aborts the
    /// cascade with no retry and no rollback, leaving the course in a
    /// partially cleaned state. Once the cascade completes, the course and
    /// everything that referenced it are permanently unrecoverable.
    pub async fn delete_course_cascade(&self, course_id: &CourseId) -> Result<(), AppError> {
        if self.store.get(course_id).await?.is_none() {
            return Ok(());
        }

        let query = CascadeDeletionQuery::for_course(course_id.clone());
        self.response_comments.delete_by_query(&query).await?;
        self.responses.delete_by_query(&query).await?;
        self.questions.delete_by_query(&query).await?;
        self.sessions.delete_by_query(&query).await?;
        self.students.delete_by_query(&query).await?;
        self.instructors.delete_by_query(&query).await?;
        self.deadline_extensions.delete_by_query(&query).await?;

        self.store.delete(course_id).await?;
        Ok(())
    }
}
