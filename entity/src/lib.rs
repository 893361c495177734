pub mod employee;
pub mod organization;
pub mod art;
pub mod team;
pub mod employee_org;
pub mod employee_art;
pub mod employee_team;

/*
 Organizations own ARTs, ARTs own teams. Employees hang off all three through
 link tables, and each link carries an owner flag.
 Org and ART links are one row per (employee, entity). Team links are one row
 per role, so an employee can sit on a team twice with two job titles and the
 owner flag lives on each role-row.
 Demoting an owner flips the flag. Rows only go away when the employee or the
 entity itself is deleted.
 */
