pub mod organisation;
pub mod user;
pub mod user_organisation;

/*
 Users and organisations are many-to-many through user_organisation.
 Every registered user gets a personal organisation ("<first>'s Organisation")
 and can create more. Membership is the only access rule: a member can read the
 organisation, nobody else can see that it exists.
 */
