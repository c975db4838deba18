//! The built-in episode list for all nine seasons of *The Office*.
//!
//! Records are grouped per season and listed in broadcast order. The catalog
//! flattens them into [`Episode`](crate::types::Episode) values at startup.

/// A raw `(episode_number, title, released_date)` record.
pub type EpisodeRecord = (i32, &'static str, &'static str);

/// Every season, in order. Index `i` holds season `i + 1`.
pub const SEASONS: &[&[EpisodeRecord]] = &[
    SEASON_1, SEASON_2, SEASON_3, SEASON_4, SEASON_5, SEASON_6, SEASON_7, SEASON_8, SEASON_9,
];

const SEASON_1: &[EpisodeRecord] = &[
    (1, "Pilot", "2005-03-24"),
    (2, "Diversity Day", "2005-03-29"),
    (3, "Health Care", "2005-04-05"),
    (4, "The Alliance", "2005-04-12"),
    (5, "Basketball", "2005-04-19"),
    (6, "Hot Girl", "2005-04-26"),
];

const SEASON_2: &[EpisodeRecord] = &[
    (1, "The Dundies", "2005-09-20"),
    (2, "Sexual Harassment", "2005-09-27"),
    (3, "Office Olympics", "2005-10-04"),
    (4, "The Fire", "2005-10-11"),
    (5, "Halloween", "2005-10-18"),
    (6, "The Fight", "2005-11-01"),
    (7, "The Client", "2005-11-08"),
    (8, "Performance Review", "2005-11-15"),
    (9, "Email Surveillance", "2005-11-22"),
    (10, "Christmas Party", "2005-12-06"),
    (11, "Booze Cruise", "2006-01-05"),
    (12, "The Injury", "2006-01-12"),
    (13, "The Secret", "2006-01-19"),
    (14, "The Carpet", "2006-01-26"),
    (15, "Boys and Girls", "2006-02-02"),
    (16, "Valentine's Day", "2006-02-09"),
    (17, "Dwight's Speech", "2006-03-02"),
    (18, "Take Your Daughter to Work Day", "2006-03-16"),
    (19, "Michael's Birthday", "2006-03-30"),
    (20, "Drug Testing", "2006-04-27"),
    (21, "Conflict Resolution", "2006-05-04"),
    (22, "Casino Night", "2006-05-11"),
];

const SEASON_3: &[EpisodeRecord] = &[
    (1, "Gay Witch Hunt", "2006-09-21"),
    (2, "The Convention", "2006-09-28"),
    (3, "The Coup", "2006-10-05"),
    (4, "Grief Counseling", "2006-10-12"),
    (5, "Initiation", "2006-10-19"),
    (6, "Diwali", "2006-11-02"),
    (7, "Branch Closing", "2006-11-09"),
    (8, "The Merger", "2006-11-16"),
    (9, "The Convict", "2006-11-30"),
    (10, "A Benihana Christmas", "2006-12-14"),
    (11, "Back from Vacation", "2007-01-04"),
    (12, "Traveling Salesmen", "2007-01-11"),
    (13, "The Return", "2007-01-18"),
    (14, "Ben Franklin", "2007-02-01"),
    (15, "Phyllis' Wedding", "2007-02-08"),
    (16, "Business School", "2007-02-15"),
    (17, "Cocktails", "2007-02-22"),
    (18, "The Negotiation", "2007-04-05"),
    (19, "Safety Training", "2007-04-12"),
    (20, "Product Recall", "2007-04-26"),
    (21, "Women's Appreciation", "2007-05-03"),
    (22, "Beach Games", "2007-05-10"),
    (23, "The Job", "2007-05-17"),
];

const SEASON_4: &[EpisodeRecord] = &[
    (1, "Fun Run", "2007-09-27"),
    (2, "Dunder Mifflin Infinity", "2007-10-04"),
    (3, "Launch Party", "2007-10-11"),
    (4, "Money", "2007-10-18"),
    (5, "Local Ad", "2007-10-25"),
    (6, "Branch Wars", "2007-11-01"),
    (7, "Survivor Man", "2007-11-08"),
    (8, "The Deposition", "2007-11-15"),
    (9, "Dinner Party", "2008-04-10"),
    (10, "Chair Model", "2008-04-17"),
    (11, "Night Out", "2008-04-24"),
    (12, "Did I Stutter?", "2008-05-01"),
    (13, "Job Fair", "2008-05-08"),
    (14, "Goodbye, Toby", "2008-05-15"),
];

const SEASON_5: &[EpisodeRecord] = &[
    (1, "Weight Loss", "2008-09-25"),
    (2, "Business Ethics", "2008-10-09"),
    (3, "Baby Shower", "2008-10-16"),
    (4, "Crime Aid", "2008-10-23"),
    (5, "Employee Transfer", "2008-10-30"),
    (6, "Customer Survey", "2008-11-06"),
    (7, "Business Trip", "2008-11-13"),
    (8, "Frame Toby", "2008-11-20"),
    (9, "The Surplus", "2008-12-04"),
    (10, "Moroccan Christmas", "2008-12-11"),
    (11, "The Duel", "2009-01-15"),
    (12, "Prince Family Paper", "2009-01-22"),
    (13, "Stress Relief", "2009-02-01"),
    (14, "Lecture Circuit", "2009-02-05"),
    (15, "Blood Drive", "2009-03-05"),
    (16, "Golden Ticket", "2009-03-12"),
    (17, "New Boss", "2009-03-19"),
    (18, "Two Weeks", "2009-03-26"),
    (19, "Michael Scott Paper Company", "2009-04-09"),
    (20, "Dream Team", "2009-04-09"),
    (21, "Michael Scott Paper Company", "2009-04-16"),
    (22, "Heavy Competition", "2009-04-16"),
    (23, "Broke", "2009-04-23"),
    (24, "Casual Friday", "2009-04-30"),
    (25, "Cafe Disco", "2009-05-07"),
    (26, "Company Picnic", "2009-05-14"),
];

const SEASON_6: &[EpisodeRecord] = &[
    (1, "Gossip", "2009-09-17"),
    (2, "The Meeting", "2009-09-24"),
    (3, "The Promotion", "2009-10-01"),
    (4, "Niagara", "2009-10-08"),
    (5, "Mafia", "2009-10-15"),
    (6, "The Lover", "2009-10-22"),
    (7, "Koi Pond", "2009-10-29"),
    (8, "Double Date", "2009-11-05"),
    (9, "Murder", "2009-11-12"),
    (10, "Shareholder Meeting", "2009-11-19"),
    (11, "Scott's Tots", "2009-12-03"),
    (12, "Secret Santa", "2009-12-10"),
    (13, "The Banker", "2010-01-21"),
    (14, "Sabre", "2010-02-04"),
    (15, "The Manager and the Salesman", "2010-02-11"),
    (16, "The Delivery", "2010-03-04"),
    (17, "St. Patrick's Day", "2010-03-11"),
    (18, "New Leads", "2010-03-18"),
    (19, "Happy Hour", "2010-03-25"),
    (20, "The Chump", "2010-04-01"),
    (21, "Whistleblower", "2010-04-08"),
    (22, "Body Language", "2010-04-29"),
    (23, "The Cover-Up", "2010-05-06"),
    (24, "The Chump", "2010-05-13"),
    (25, "Whistleblower", "2010-05-20"),
    (26, "Finale", "2010-05-20"),
];

const SEASON_7: &[EpisodeRecord] = &[
    (1, "Nepotism", "2010-09-23"),
    (2, "Counseling", "2010-09-30"),
    (3, "Andy's Play", "2010-10-07"),
    (4, "Sex Ed", "2010-10-14"),
    (5, "The Sting", "2010-10-21"),
    (6, "Costume Contest", "2010-10-28"),
    (7, "Christening", "2010-11-04"),
    (8, "Viewing Party", "2010-11-11"),
    (9, "WUPHF.com", "2010-11-18"),
    (10, "China", "2010-12-02"),
    (11, "Classy Christmas", "2010-12-09"),
    (12, "Ultimatum", "2011-01-20"),
    (13, "The Seminar", "2011-01-27"),
    (14, "The Search", "2011-02-03"),
    (15, "PDA", "2011-02-10"),
    (16, "Threat Level Midnight", "2011-02-17"),
    (17, "Todd Packer", "2011-02-24"),
    (18, "Garage Sale", "2011-03-24"),
    (19, "Training Day", "2011-04-14"),
    (20, "Michael's Last Dundies", "2011-04-21"),
    (21, "Goodbye, Michael", "2011-04-28"),
    (22, "The Inner Circle", "2011-05-05"),
    (23, "Dwight K. Schrute, (Acting) Manager", "2011-05-12"),
    (24, "Search Committee", "2011-05-19"),
];

const SEASON_8: &[EpisodeRecord] = &[
    (1, "The List", "2011-09-22"),
    (2, "The Incentive", "2011-09-29"),
    (3, "Lotto", "2011-10-06"),
    (4, "Garden Party", "2011-10-13"),
    (5, "Spooked", "2011-10-27"),
    (6, "Doomsday", "2011-11-03"),
    (7, "Pam's Replacement", "2011-11-10"),
    (8, "Gettysburg", "2011-11-17"),
    (9, "Mrs. California", "2011-12-01"),
    (10, "Christmas Wish", "2011-12-08"),
    (11, "Trivia", "2012-01-12"),
    (12, "Pool Party", "2012-01-19"),
    (13, "Jury Duty", "2012-02-02"),
    (14, "Special Project", "2012-02-09"),
    (15, "Tallahassee", "2012-02-16"),
    (16, "After Hours", "2012-02-23"),
    (17, "Test the Store", "2012-03-01"),
    (18, "Last Day in Florida", "2012-03-08"),
    (19, "Get the Girl", "2012-03-15"),
    (20, "Welcome Party", "2012-04-12"),
    (21, "Angry Andy", "2012-04-19"),
    (22, "Fundraiser", "2012-04-26"),
    (23, "Turf War", "2012-05-03"),
    (24, "Free Family Portrait Studio", "2012-05-10"),
];

const SEASON_9: &[EpisodeRecord] = &[
    (1, "New Guys", "2012-09-20"),
    (2, "Roy's Wedding", "2012-09-27"),
    (3, "Andy's Ancestry", "2012-10-04"),
    (4, "Work Bus", "2012-10-18"),
    (5, "Here Comes Treble", "2012-10-25"),
    (6, "The Boat", "2012-11-08"),
    (7, "The Whale", "2012-11-15"),
    (8, "The Target", "2012-11-29"),
    (9, "Dwight Christmas", "2012-12-06"),
    (10, "Lice", "2013-01-10"),
    (11, "Suit Warehouse", "2013-01-17"),
    (12, "Customer Loyalty", "2013-01-24"),
    (13, "Junior Salesman", "2013-01-31"),
    (14, "Vandalism", "2013-02-07"),
    (15, "Couples Discount", "2013-02-07"),
    (16, "Moving On", "2013-02-14"),
    (17, "The Farm", "2013-03-14"),
    (18, "Promos", "2013-04-04"),
    (19, "Stairmageddon", "2013-04-11"),
    (20, "Paper Airplane", "2013-04-25"),
    (21, "Livin' the Dream", "2013-05-02"),
    (22, "A.A.R.M.", "2013-05-09"),
    (23, "Finale", "2013-05-16"),
];
