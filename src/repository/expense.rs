use diesel::prelude::*;

use crate::domain::expense::{Expense, NewExpense, UpdateExpense};
use crate::models::expense::{
    Expense as DbExpense, NewExpense as DbNewExpense, UpdateExpense as DbUpdateExpense,
};
use crate::repository::{
    DieselRepository, ExpenseListQuery, ExpenseReader, ExpenseWriter, errors::RepositoryResult,
};

impl ExpenseReader for DieselRepository {
    fn get_expense_by_id(&self, id: i32) -> RepositoryResult<Option<Expense>> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        let expense = expenses::table
            .find(id)
            .first::<DbExpense>(&mut conn)
            .optional()?;

        Ok(expense.map(Into::into))
    }

    fn list_expenses(&self, query: ExpenseListQuery) -> RepositoryResult<Vec<Expense>> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        let mut statement = expenses::table.into_boxed();

        if let Some(from) = query.from {
            statement = statement.filter(expenses::date.ge(from));
        }
        if let Some(to) = query.to {
            statement = statement.filter(expenses::date.le(to));
        }

        let expenses = statement
            .order(expenses::date.desc())
            .load::<DbExpense>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(expenses)
    }
}

impl ExpenseWriter for DieselRepository {
    fn create_expense(&self, new_expense: &NewExpense) -> RepositoryResult<Expense> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        let insertable: DbNewExpense = new_expense.into();
        let created = diesel::insert_into(expenses::table)
            .values(&insertable)
            .get_result::<DbExpense>(&mut conn)?;

        Ok(created.into())
    }

    fn update_expense(
        &self,
        expense_id: i32,
        updates: &UpdateExpense,
    ) -> RepositoryResult<Expense> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        let changeset: DbUpdateExpense = updates.into();
        let updated = diesel::update(expenses::table.find(expense_id))
            .set(&changeset)
            .get_result::<DbExpense>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_expense(&self, expense_id: i32) -> RepositoryResult<()> {
        use crate::schema::expenses;

        let mut conn = self.conn()?;
        diesel::delete(expenses::table.find(expense_id)).execute(&mut conn)?;
        Ok(())
    }
}
