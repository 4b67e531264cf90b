//! Curated business-learning video catalog.
//!
//! Public TED talks on growth, leadership, entrepreneurship, marketing,
//! decision making and productivity, chosen for small business owners.

use serde::Serialize;

use crate::types::{Video, VideoCategory};

/// A catalog entry. Static, never fetched.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CuratedVideo {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub thumbnail: &'static str,
    pub category: &'static str,
}

impl From<&CuratedVideo> for Video {
    fn from(v: &CuratedVideo) -> Self {
        Video {
            url: v.url.to_string(),
            title: v.title.to_string(),
            thumbnail: v.thumbnail.to_string(),
            description: v.description.to_string(),
            category: v.category.to_string(),
        }
    }
}

static CURATED_VIDEOS: &[CuratedVideo] = &[
    CuratedVideo {
        title: "The single biggest reason why start-ups succeed | Bill Gross",
        description: "Bill Gross has founded a lot of start-ups, and incubated many others — and he got curious about why some succeeded and others failed. So he gathered data from hundreds of companies, his own and other people's, and ranked each company on five key factors. He found one factor that stands out from the others — and surprised even him.",
        url: "https://www.youtube.com/watch?v=bNpx7gpSqbY",
        thumbnail: "https://i.ytimg.com/vi/bNpx7gpSqbY/hqdefault.jpg",
        category: "Business Growth & Strategy",
    },
    CuratedVideo {
        title: "How to build a company where the best ideas win | Ray Dalio",
        description: "What if you knew what your coworkers really thought about you and what they were really like? Ray Dalio makes the business case for using radical transparency and algorithmic decision-making to create an idea meritocracy where people can speak up and say what they really think.",
        url: "https://www.youtube.com/watch?v=hm3IPkWBvcY",
        thumbnail: "https://i.ytimg.com/vi/hm3IPkWBvcY/hqdefault.jpg",
        category: "Business Growth & Strategy",
    },
    CuratedVideo {
        title: "The way we think about work is broken | Barry Schwartz",
        description: "What makes work satisfying? Apart from a paycheck, there are intangible values of work that are rarely discussed. In this talk, Barry Schwartz makes a passionate call for \"practical wisdom\" as an antidote to a society gone mad with bureaucracy.",
        url: "https://www.youtube.com/watch?v=lRO3jnXQhAs",
        thumbnail: "https://i.ytimg.com/vi/lRO3jnXQhAs/hqdefault.jpg",
        category: "Business Growth & Strategy",
    },
    CuratedVideo {
        title: "How great leaders inspire action | Simon Sinek",
        description: "Simon Sinek presents a simple but powerful model for how leaders inspire action, starting with a golden circle and the question \"Why?\" His examples include Apple, Martin Luther King, and the Wright brothers.",
        url: "https://www.youtube.com/watch?v=qp0HIF3SfI4",
        thumbnail: "https://i.ytimg.com/vi/qp0HIF3SfI4/hqdefault.jpg",
        category: "Leadership & Management",
    },
    CuratedVideo {
        title: "The puzzle of motivation | Dan Pink",
        description: "Career analyst Dan Pink examines the puzzle of motivation, starting with a fact that social scientists know but most managers don't: Traditional rewards aren't always as effective as we think.",
        url: "https://www.youtube.com/watch?v=rrkrvAUbU9Y",
        thumbnail: "https://i.ytimg.com/vi/rrkrvAUbU9Y/hqdefault.jpg",
        category: "Leadership & Management",
    },
    CuratedVideo {
        title: "The happy secret to better work | Shawn Achor",
        description: "We believe that we should work to be happy, but could that be backwards? In this fast-moving and entertaining talk, psychologist Shawn Achor argues that actually happiness inspires productivity.",
        url: "https://www.youtube.com/watch?v=fLJsdqxnZb0",
        thumbnail: "https://i.ytimg.com/vi/fLJsdqxnZb0/hqdefault.jpg",
        category: "Leadership & Management",
    },
    CuratedVideo {
        title: "Why good leaders make you feel safe | Simon Sinek",
        description: "What makes a great leader? Management theorist Simon Sinek suggests, it's someone who makes their employees feel secure, who draws staffers into a circle of trust. But creating trust and safety requires courage and sacrifice.",
        url: "https://www.youtube.com/watch?v=lmyZMtPVodo",
        thumbnail: "https://i.ytimg.com/vi/lmyZMtPVodo/hqdefault.jpg",
        category: "Leadership & Management",
    },
    CuratedVideo {
        title: "Your body language may shape who you are | Amy Cuddy",
        description: "Body language affects how others see us, but it may also change how we see ourselves. Social psychologist Amy Cuddy argues that \"power posing\" can boost feelings of confidence, and might have an impact on our chances for success.",
        url: "https://www.youtube.com/watch?v=Ks-_Mh1QhMc",
        thumbnail: "https://i.ytimg.com/vi/Ks-_Mh1QhMc/hqdefault.jpg",
        category: "Entrepreneurship & Innovation",
    },
    CuratedVideo {
        title: "How to build your creative confidence | David Kelley",
        description: "Is your school or workplace divided into \"creatives\" versus practical people? Yet surely, David Kelley suggests, creativity is not the domain of only a chosen few. Telling stories from his legendary design career and his own life, he offers ways to build the confidence to create.",
        url: "https://www.youtube.com/watch?v=16p9YRF0l-g",
        thumbnail: "https://i.ytimg.com/vi/16p9YRF0l-g/hqdefault.jpg",
        category: "Entrepreneurship & Innovation",
    },
    CuratedVideo {
        title: "The power of believing that you can improve | Carol Dweck",
        description: "Carol Dweck researches \"growth mindset\" — the idea that we can grow our brain's capacity to learn and to solve problems. In this talk, she describes two ways to think about a problem that's slightly too hard for you to solve.",
        url: "https://www.youtube.com/watch?v=_X0mgOOSpLU",
        thumbnail: "https://i.ytimg.com/vi/_X0mgOOSpLU/hqdefault.jpg",
        category: "Entrepreneurship & Innovation",
    },
    CuratedVideo {
        title: "The surprising habits of original thinkers | Adam Grant",
        description: "How do creative people come up with great ideas? Organizational psychologist Adam Grant studies \"originals\": thinkers who dream up new ideas and take action to put them into the world.",
        url: "https://www.youtube.com/watch?v=fxbCHn6gE3U",
        thumbnail: "https://i.ytimg.com/vi/fxbCHn6gE3U/hqdefault.jpg",
        category: "Entrepreneurship & Innovation",
    },
    CuratedVideo {
        title: "The art of asking | Amanda Palmer",
        description: "Don't make people pay for music, says Amanda Palmer. Let them. In a passionate talk that begins in her days as a street performer, she examines the new relationship between artist and fan.",
        url: "https://www.youtube.com/watch?v=xMj_P_6H69g",
        thumbnail: "https://i.ytimg.com/vi/xMj_P_6H69g/hqdefault.jpg",
        category: "Marketing & Communication",
    },
    CuratedVideo {
        title: "How to speak so that people want to listen | Julian Treasure",
        description: "Have you ever felt like you're talking, but nobody is listening? Here's Julian Treasure to help. In this useful talk, the sound expert demonstrates the how-to's of powerful speaking.",
        url: "https://www.youtube.com/watch?v=eIho2S0ZahI",
        thumbnail: "https://i.ytimg.com/vi/eIho2S0ZahI/hqdefault.jpg",
        category: "Marketing & Communication",
    },
    CuratedVideo {
        title: "The power of vulnerability | Brené Brown",
        description: "Brené Brown studies human connection -- our ability to empathize, belong, love. In a poignant, funny talk, she shares a deep insight from her research, one that sent her on a personal quest to know herself as well as to understand humanity.",
        url: "https://www.youtube.com/watch?v=iCvmsMzlF7o",
        thumbnail: "https://i.ytimg.com/vi/iCvmsMzlF7o/hqdefault.jpg",
        category: "Marketing & Communication",
    },
    CuratedVideo {
        title: "The psychology of your future self | Dan Gilbert",
        description: "\"Human beings are works in progress that mistakenly think they're finished.\" Dan Gilbert shares recent research on a phenomenon he calls the \"end of history illusion,\" where we somehow imagine that the person we are right now is the person we'll be for the rest of time.",
        url: "https://www.youtube.com/watch?v=XNbaR54Gpj4",
        thumbnail: "https://i.ytimg.com/vi/XNbaR54Gpj4/hqdefault.jpg",
        category: "Financial Planning & Decision Making",
    },
    CuratedVideo {
        title: "How to make hard choices | Ruth Chang",
        description: "Here's a talk that could literally change your life. Which career should I pursue? Should I break up — or get married?! Where should I live? Big decisions like these can be agonizingly difficult. But that's because we think about them the wrong way, says philosopher Ruth Chang.",
        url: "https://www.youtube.com/watch?v=8GQZuzIdeQQ",
        thumbnail: "https://i.ytimg.com/vi/8GQZuzIdeQQ/hqdefault.jpg",
        category: "Financial Planning & Decision Making",
    },
    CuratedVideo {
        title: "The riddle of experience vs. memory | Daniel Kahneman",
        description: "Using examples from vacations to colonoscopies, Nobel laureate and founder of behavioral economics Daniel Kahneman reveals how our \"experiencing selves\" and our \"remembering selves\" perceive happiness differently.",
        url: "https://www.youtube.com/watch?v=XgRlrBl-7Yg",
        thumbnail: "https://i.ytimg.com/vi/XgRlrBl-7Yg/hqdefault.jpg",
        category: "Financial Planning & Decision Making",
    },
    CuratedVideo {
        title: "Inside the mind of a master procrastinator | Tim Urban",
        description: "Tim Urban knows that procrastination doesn't make sense, but he's never been able to shake his habit of waiting until the last minute to get things done. In this hilarious and insightful talk, Urban takes us on a journey through YouTube binges, Wikipedia rabbit holes and bouts of staring out the window.",
        url: "https://www.youtube.com/watch?v=arj7oStGLkU",
        thumbnail: "https://i.ytimg.com/vi/arj7oStGLkU/hqdefault.jpg",
        category: "Productivity & Time Management",
    },
    CuratedVideo {
        title: "How to gain control of your free time | Laura Vanderkam",
        description: "There are 168 hours in each week. How do we find time for what matters most? Time management expert Laura Vanderkam studies how busy people spend their lives, and she's discovered that many of us drastically overestimate our commitments each week, while underestimating the time we have to ourselves.",
        url: "https://www.youtube.com/watch?v=n3kNlFMXslo",
        thumbnail: "https://i.ytimg.com/vi/n3kNlFMXslo/hqdefault.jpg",
        category: "Productivity & Time Management",
    },
];

pub fn curated_videos() -> &'static [CuratedVideo] {
    CURATED_VIDEOS
}

/// Catalog grouped by category, categories in first-appearance order.
pub fn curated_categories() -> Vec<VideoCategory> {
    let mut categories: Vec<VideoCategory> = Vec::new();
    for video in CURATED_VIDEOS {
        match categories.iter_mut().find(|c| c.name == video.category) {
            Some(category) => category.videos.push(video.into()),
            None => categories.push(VideoCategory {
                name: video.category.to_string(),
                videos: vec![video.into()],
            }),
        }
    }
    categories
}
