//! Forwarding facade over a single course.

use shared::{Course, RosterError, Student};

/// Wraps exactly one [`Course`] and forwards every read and write to it.
///
/// Nothing is cached, so changes made through [`CourseAccessor::course_students_mut`]
/// are seen by the next indexed read.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseAccessor {
    course: Course,
}

impl CourseAccessor {
    pub fn new(course: Course) -> Self {
        Self { course }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn into_course(self) -> Course {
        self.course
    }

    pub fn course_name(&self) -> &str {
        self.course.name()
    }

    pub fn set_course_name(&mut self, name: impl Into<String>) {
        self.course.set_name(name);
    }

    pub fn course_students(&self) -> &[Student] {
        self.course.students()
    }

    pub fn course_students_mut(&mut self) -> &mut Vec<Student> {
        self.course.students_mut()
    }

    /// Replaces the roster outright and hands back the previous one.
    pub fn set_course_students(&mut self, students: Vec<Student>) -> Vec<Student> {
        self.course.set_students(students)
    }

    pub fn student_name(&self, index: usize) -> Result<&str, RosterError> {
        Ok(self.student(index)?.name())
    }

    pub fn set_student_name(
        &mut self,
        name: impl Into<String>,
        index: usize,
    ) -> Result<(), RosterError> {
        self.student_mut(index)?.set_name(name);
        Ok(())
    }

    pub fn student_grade(&self, index: usize) -> Result<f64, RosterError> {
        Ok(self.student(index)?.grade())
    }

    pub fn set_student_grade(&mut self, grade: f64, index: usize) -> Result<(), RosterError> {
        self.student_mut(index)?.set_grade(grade);
        Ok(())
    }

    fn student(&self, index: usize) -> Result<&Student, RosterError> {
        let students = self.course.students();
        students.get(index).ok_or(RosterError::IndexOutOfRange {
            index,
            len: students.len(),
        })
    }

    fn student_mut(&mut self, index: usize) -> Result<&mut Student, RosterError> {
        let students = self.course.students_mut();
        let len = students.len();
        students
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
#[path = "tests/accessor_tests.rs"]
mod tests;
